use super::*;

const RU_RANDOM_URL: &str = "https://ru.wikipedia.org/wiki/%D0%A1%D0%BB%D1%83%D0%B6%D0%B5%D0%B1%D0%BD%D0%B0%D1%8F:%D0%A1%D0%BB%D1%83%D1%87%D0%B0%D0%B9%D0%BD%D0%B0%D1%8F_%D1%81%D1%82%D1%80%D0%B0%D0%BD%D0%B8%D1%86%D0%B0";

const RU_FALLBACK_URL: &str = "https://ru.wikipedia.org/wiki/%D0%97%D0%B0%D0%B3%D0%BB%D0%B0%D0%B2%D0%BD%D0%B0%D1%8F_%D1%81%D1%82%D1%80%D0%B0%D0%BD%D0%B8%D1%86%D0%B0";

/// One of the two supported language variants of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
  En,
  Ru,
}

impl Language {
  /// Derives the variant from a source URL's host; anything that is not the
  /// Russian domain resolves to English.
  pub fn from_article_url(url: &str) -> Self {
    if url.contains("ru.wikipedia.org") {
      Self::Ru
    } else {
      Self::En
    }
  }

  /// Parses a `lang` query code; unrecognized codes default to English.
  pub fn from_code(code: &str) -> Self {
    if code == "ru" {
      Self::Ru
    } else {
      Self::En
    }
  }

  pub fn code(self) -> &'static str {
    match self {
      Self::En => "en",
      Self::Ru => "ru",
    }
  }

  /// Base domain used when resolving relative paths to absolute URLs.
  pub fn base_url(self) -> &'static str {
    match self {
      Self::En => "https://en.wikipedia.org",
      Self::Ru => "https://ru.wikipedia.org",
    }
  }

  /// Entry point that redirects to a random article.
  pub fn random_url(self) -> &'static str {
    match self {
      Self::En => "https://en.wikipedia.org/wiki/Special:Random",
      Self::Ru => RU_RANDOM_URL,
    }
  }

  /// Static article returned when random resolution fails.
  pub fn fallback_url(self) -> &'static str {
    match self {
      Self::En => "https://en.wikipedia.org/wiki/Main_Page",
      Self::Ru => RU_FALLBACK_URL,
    }
  }
}
