use super::*;

/// Finds the best-guess article title from a priority list of selectors.
/// Cannot fail; the worst case is a fixed placeholder title.
pub struct TitleStage;

impl Stage for TitleStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let title = Self::extract(context.document());

    context.set_title(title);

    Ok(())
  }
}

impl TitleStage {
  /// Canonical article heading group; when several elements match, the last
  /// one's text wins.
  const CANONICAL_HEADING: &'static str =
    "#firstHeading, h1#firstHeading, h1.mw-first-heading";

  /// Broad fallback; the first heading with non-empty text wins.
  const ANY_HEADING: &'static str = "h1";

  const DEFAULT_TITLE: &'static str = "Article";

  fn extract(document: &Document) -> String {
    let mut title = String::new();

    for node in document.select(Self::CANONICAL_HEADING).nodes() {
      title = Selection::from(*node).text().trim().to_string();
    }

    if title.is_empty() {
      for node in document.select(Self::ANY_HEADING).nodes() {
        let text = Selection::from(*node).text().trim().to_string();

        if !text.is_empty() {
          title = text;
          break;
        }
      }
    }

    if title.is_empty() {
      Self::DEFAULT_TITLE.to_string()
    } else {
      title
    }
  }
}
