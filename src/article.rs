use super::*;

/// The displayable article produced by the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
  /// Best-guess article title; never empty.
  pub title: String,
  /// Complete standalone HTML document wrapping the sanitized content.
  pub content: String,
  /// Outgoing intra-site article links, unique, in first-occurrence order.
  pub links: Vec<String>,
}
