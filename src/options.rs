/// Tunable thresholds for the extraction pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
  /// Assembled content shorter than this (in characters, after trimming)
  /// triggers paragraph-based recovery.
  pub min_content_length: usize,
  /// Minimum trimmed text length for a paragraph to qualify for recovery.
  pub min_paragraph_length: usize,
}

impl Default for ExtractOptions {
  fn default() -> Self {
    Self {
      min_content_length: 100,
      min_paragraph_length: 50,
    }
  }
}
