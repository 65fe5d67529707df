use super::*;

/// Normalizes anchor targets to absolute URLs, strips inline event handler
/// attributes from fetched markup, marks anchors draggable for the consuming
/// UI, and collects the outgoing article link set.
pub struct RewriteLinksStage;

impl Stage for RewriteLinksStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let links = match context.fragment() {
      Some(fragment) => Self::rewrite(fragment, context.language().base_url()),
      None => return Ok(()),
    };

    context.set_links(links);

    Ok(())
  }
}

impl RewriteLinksStage {
  const ARTICLE_PREFIX: &'static str = "/wiki/";

  const EVENT_HANDLER_ATTRIBUTES: [&'static str; 3] =
    ["onclick", "onmousedown", "onmouseup"];

  fn rewrite(fragment: &ContentFragment, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    for node in fragment.select("a[href]").nodes() {
      let anchor = Selection::from(*node);

      if let Some(href) = anchor.attr("href") {
        if let Some(target) = Self::rewrite_href(&href, base_url) {
          if Self::is_article_link(&href) && seen.insert(target.clone()) {
            links.push(target.clone());
          }

          anchor.set_attr("href", &target);
        }
      }

      for attribute in Self::EVENT_HANDLER_ATTRIBUTES {
        anchor.remove_attr(attribute);
      }

      anchor.set_attr("draggable", "true");
      anchor.set_attr("data-draggable", "true");
    }

    links
  }

  /// Absolute form for the three rewritable prefixes; `None` leaves the
  /// attribute untouched (absolute URLs, mail-to, fragment-only).
  fn rewrite_href(href: &str, base_url: &str) -> Option<String> {
    if href.starts_with(Self::ARTICLE_PREFIX) {
      Some(format!("{base_url}{href}"))
    } else if href.starts_with("//") {
      Some(format!("https:{href}"))
    } else if href.starts_with('/') {
      Some(format!("{base_url}{href}"))
    } else {
      None
    }
  }

  /// Only plain article paths join the link collection: no namespace colon,
  /// no fragment marker.
  fn is_article_link(href: &str) -> bool {
    href.starts_with(Self::ARTICLE_PREFIX)
      && !href.contains(':')
      && !href.contains('#')
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const BASE: &str = "https://en.wikipedia.org";

  fn rewrite(markup: &str) -> (ContentFragment, Vec<String>) {
    let fragment = ContentFragment::from_markup(markup);
    let links = RewriteLinksStage::rewrite(&fragment, BASE);

    (fragment, links)
  }

  #[test]
  fn article_paths_are_rewritten_and_collected() {
    let (fragment, links) = rewrite("<a href=\"/wiki/Cat\">Cat</a>");

    assert_eq!(links, vec!["https://en.wikipedia.org/wiki/Cat"]);
    assert_eq!(
      fragment.select("a").attr("href").unwrap().to_string(),
      "https://en.wikipedia.org/wiki/Cat"
    );
  }

  #[test]
  fn namespace_paths_are_rewritten_but_not_collected() {
    let (fragment, links) =
      rewrite("<a href=\"/wiki/Category:Foo\">Category</a>");

    assert!(links.is_empty());
    assert_eq!(
      fragment.select("a").attr("href").unwrap().to_string(),
      "https://en.wikipedia.org/wiki/Category:Foo"
    );
  }

  #[test]
  fn fragment_paths_are_rewritten_but_not_collected() {
    let (fragment, links) = rewrite("<a href=\"/wiki/Cat#History\">History</a>");

    assert!(links.is_empty());
    assert_eq!(
      fragment.select("a").attr("href").unwrap().to_string(),
      "https://en.wikipedia.org/wiki/Cat#History"
    );
  }

  #[test]
  fn scheme_relative_urls_gain_the_secure_scheme() {
    let (fragment, links) =
      rewrite("<a href=\"//upload.example/x.png\">File</a>");

    assert!(links.is_empty());
    assert_eq!(
      fragment.select("a").attr("href").unwrap().to_string(),
      "https://upload.example/x.png"
    );
  }

  #[test]
  fn root_relative_paths_are_rewritten_but_not_collected() {
    let (fragment, links) = rewrite("<a href=\"/w/index.php\">Edit</a>");

    assert!(links.is_empty());
    assert_eq!(
      fragment.select("a").attr("href").unwrap().to_string(),
      "https://en.wikipedia.org/w/index.php"
    );
  }

  #[test]
  fn other_targets_are_left_unmodified() {
    let (fragment, links) =
      rewrite("<a href=\"mailto:someone@example.com\">Mail</a>");

    assert!(links.is_empty());
    assert_eq!(
      fragment.select("a").attr("href").unwrap().to_string(),
      "mailto:someone@example.com"
    );
  }

  #[test]
  fn duplicate_targets_are_collected_once_in_first_occurrence_order() {
    let (_, links) = rewrite(
      "<a href=\"/wiki/Dog\">Dog</a>\
       <a href=\"/wiki/Cat\">Cat</a>\
       <a href=\"/wiki/Dog\">Dog again</a>",
    );

    assert_eq!(
      links,
      vec![
        "https://en.wikipedia.org/wiki/Dog",
        "https://en.wikipedia.org/wiki/Cat"
      ]
    );
  }

  #[test]
  fn event_handlers_are_stripped_and_anchors_marked_draggable() {
    let (fragment, _) = rewrite(
      "<a href=\"https://example.com\" onclick=\"steal()\" onmousedown=\"x()\">Out</a>",
    );

    let anchor = fragment.select("a");

    assert!(anchor.attr("onclick").is_none());
    assert!(anchor.attr("onmousedown").is_none());
    assert_eq!(anchor.attr("draggable").unwrap().to_string(), "true");
    assert_eq!(anchor.attr("data-draggable").unwrap().to_string(), "true");
  }
}
