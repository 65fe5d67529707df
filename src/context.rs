use super::*;

/// Per-invocation pipeline state; owned exclusively by one extraction call.
pub(crate) struct Context<'a> {
  doc: &'a Document,
  language: Language,
  source_url: &'a str,
  options: &'a ExtractOptions,
  logger: &'a LogHandle,
  title: String,
  fragment: Option<ContentFragment>,
  links: Vec<String>,
  content: Option<String>,
}

impl<'a> Context<'a> {
  pub(crate) fn new(
    doc: &'a Document,
    language: Language,
    source_url: &'a str,
    options: &'a ExtractOptions,
    logger: &'a LogHandle,
  ) -> Self {
    Self {
      doc,
      language,
      source_url,
      options,
      logger,
      title: String::new(),
      fragment: None,
      links: Vec::new(),
      content: None,
    }
  }

  /// The original parsed document; never mutated after parsing.
  pub(crate) fn document(&self) -> &Document {
    self.doc
  }

  pub(crate) fn language(&self) -> Language {
    self.language
  }

  pub(crate) fn source_url(&self) -> &str {
    self.source_url
  }

  pub(crate) fn options(&self) -> &ExtractOptions {
    self.options
  }

  pub(crate) fn logger(&self) -> &LogHandle {
    self.logger
  }

  pub(crate) fn title(&self) -> &str {
    &self.title
  }

  pub(crate) fn set_title(&mut self, title: String) {
    self.title = title;
  }

  pub(crate) fn fragment(&self) -> Option<&ContentFragment> {
    self.fragment.as_ref()
  }

  pub(crate) fn set_fragment(&mut self, fragment: ContentFragment) {
    self.fragment = Some(fragment);
  }

  pub(crate) fn set_links(&mut self, links: Vec<String>) {
    self.links = links;
  }

  pub(crate) fn set_content(&mut self, content: String) {
    self.content = Some(content);
  }

  pub(crate) fn into_article(self) -> Article {
    Article {
      title: self.title,
      content: self.content.unwrap_or_default(),
      links: self.links,
    }
  }
}
