#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to read response body: {0}")]
  BodyRead(#[source] reqwest::Error),
  #[error("request failed: {source}")]
  Fetch {
    #[from]
    source: reqwest::Error,
  },
  #[error("invalid request url: {source}")]
  InvalidUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("document contains no parsable markup")]
  MarkupParse,
  #[error("missing {0} parameter")]
  MissingParameter(&'static str),
  #[error("failed to serialize response: {source}")]
  Serialization {
    #[from]
    source: serde_json::Error,
  },
  #[error("HTTP {0}")]
  Status(u16),
}
