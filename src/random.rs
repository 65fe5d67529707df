use super::*;

/// Resolves a language's random-article endpoint to a concrete article URL
/// by following its redirect chain.
///
/// Infallible by contract: any transport or status failure degrades to the
/// language's well-known fallback article, so a caller always receives a
/// loadable URL.
pub async fn resolve_random(
  language: Language,
  fetcher: &dyn Fetch,
  logger: &LogHandle,
) -> String {
  logger.info(format!(
    "Fetching random article for language: {}",
    language.code()
  ));

  match fetcher.fetch(language.random_url()).await {
    Ok(response) => {
      logger.info(format!(
        "Random article fetched - Lang: {}, URL: {}, Status: {}",
        language.code(),
        response.final_url,
        response.status
      ));

      response.final_url
    }
    Err(error) => {
      logger.error(format!(
        "Random article fetch failed for {}: {error}",
        language.code()
      ));

      language.fallback_url().to_string()
    }
  }
}
