use super::*;

const WRAPPER_ID: &str = "extracted-content";
const WRAPPER_SELECTOR: &str = "#extracted-content";

/// A deep copy of the located content root.
///
/// The clone is realized by serializing the root's inner markup and reparsing
/// it under a marker wrapper, so sanitizer and rewriter mutations never touch
/// the original parsed document that fallback composition reads later.
pub(crate) struct ContentFragment {
  doc: Document,
}

impl ContentFragment {
  pub(crate) fn from_markup(markup: &str) -> Self {
    let wrapped = format!("<div id=\"{WRAPPER_ID}\">{markup}</div>");

    Self {
      doc: Document::from(wrapped.as_str()),
    }
  }

  fn root(&self) -> Selection<'_> {
    self.doc.select(WRAPPER_SELECTOR)
  }

  /// Matches descendants of the content root, like a scoped find.
  pub(crate) fn select(&self, selector: &str) -> Selection<'_> {
    self.root().select(selector)
  }

  pub(crate) fn remove(&self, selector: &str) {
    self.select(selector).remove();
  }

  /// Serialized inner markup of the content root.
  pub(crate) fn markup(&self) -> String {
    self.root().inner_html().to_string()
  }
}
