use super::*;

/// Normalizes image sources to absolute URLs and applies a responsive inline
/// style. Strictly attribute rewriting; no element is ever removed here.
pub struct RewriteImagesStage;

impl Stage for RewriteImagesStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if let Some(fragment) = context.fragment() {
      Self::rewrite(fragment, context.language().base_url());
    }

    Ok(())
  }
}

impl RewriteImagesStage {
  /// Bounds each image to its container width with automatic height.
  const RESPONSIVE_STYLE: &'static str = "max-width:100%; height:auto;";

  fn rewrite(fragment: &ContentFragment, base_url: &str) {
    for node in fragment.select("img[src]").nodes() {
      let image = Selection::from(*node);

      if let Some(src) = image.attr("src") {
        if src.starts_with("//") {
          image.set_attr("src", &format!("https:{src}"));
        } else if src.starts_with('/') {
          image.set_attr("src", &format!("{base_url}{src}"));
        }
      }

      image.set_attr("style", Self::RESPONSIVE_STYLE);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BASE: &str = "https://en.wikipedia.org";

  fn rewrite(markup: &str) -> ContentFragment {
    let fragment = ContentFragment::from_markup(markup);

    RewriteImagesStage::rewrite(&fragment, BASE);

    fragment
  }

  #[test]
  fn scheme_relative_sources_gain_the_secure_scheme() {
    let fragment = rewrite("<img src=\"//upload.example/cat.jpg\">");

    assert_eq!(
      fragment.select("img").attr("src").unwrap().to_string(),
      "https://upload.example/cat.jpg"
    );
  }

  #[test]
  fn root_relative_sources_are_resolved_against_the_domain() {
    let fragment = rewrite("<img src=\"/static/images/cat.jpg\">");

    assert_eq!(
      fragment.select("img").attr("src").unwrap().to_string(),
      "https://en.wikipedia.org/static/images/cat.jpg"
    );
  }

  #[test]
  fn absolute_sources_are_left_unmodified() {
    let fragment = rewrite("<img src=\"https://other.example/dog.png\">");

    assert_eq!(
      fragment.select("img").attr("src").unwrap().to_string(),
      "https://other.example/dog.png"
    );
  }

  #[test]
  fn every_image_receives_the_responsive_style() {
    let fragment = rewrite("<img src=\"https://other.example/dog.png\">");

    assert_eq!(
      fragment.select("img").attr("style").unwrap().to_string(),
      "max-width:100%; height:auto;"
    );
  }
}
