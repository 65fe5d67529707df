use super::*;

/// The single authoritative extraction pipeline entry point.
///
/// Parses the fetched markup once and drives the stage pipeline over it; the
/// parsed tree and every intermediate structure are owned by this invocation
/// and discarded with it.
pub struct Extractor {
  document: Document,
  language: Language,
  source_url: String,
  options: ExtractOptions,
}

impl Extractor {
  pub fn new(
    html: &str,
    source_url: &str,
    options: ExtractOptions,
  ) -> Result<Self> {
    if html.trim().is_empty() {
      return Err(Error::MarkupParse);
    }

    Ok(Self {
      document: Document::from(html),
      language: Language::from_article_url(source_url),
      source_url: source_url.to_string(),
      options,
    })
  }

  pub fn extract(&self, logger: &LogHandle) -> Result<Article> {
    let context = Context::new(
      &self.document,
      self.language,
      &self.source_url,
      &self.options,
      logger,
    );

    let context = Pipeline::with_default_stages(context).run()?;

    Ok(context.into_article())
  }
}
