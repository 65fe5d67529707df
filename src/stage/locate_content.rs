use super::*;

/// Locates the node containing the article body and clones it into a
/// [`ContentFragment`] so later edits never mutate the original tree.
/// Cannot fail; the worst case is the whole page body.
pub struct LocateContentStage;

impl Stage for LocateContentStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let markup = Self::content_markup(context.document());

    context.set_fragment(ContentFragment::from_markup(&markup));

    Ok(())
  }
}

impl LocateContentStage {
  /// Article body containers, most specific first; evaluation stops at the
  /// first selector with at least one match.
  const CONTENT_SELECTORS: [&'static str; 6] = [
    "#mw-content-text",
    ".mw-parser-output",
    "#bodyContent",
    ".vector-body",
    "#content",
    ".mw-body-content",
  ];

  /// Class substrings marking a structural element as a plausible body.
  const CLASS_HINTS: [&'static str; 2] = ["content", "body"];

  fn content_markup(document: &Document) -> String {
    for selector in Self::CONTENT_SELECTORS {
      let selection = document.select(selector);

      if selection.length() > 0 {
        return selection.first().inner_html().to_string();
      }
    }

    for node in document.select("div").nodes() {
      let class = node.attr("class").unwrap_or_default();

      if Self::CLASS_HINTS.iter().any(|hint| class.contains(*hint)) {
        return Selection::from(*node).inner_html().to_string();
      }
    }

    document.select("body").inner_html().to_string()
  }
}
