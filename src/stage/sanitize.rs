use super::*;

/// Strips site chrome, navigation, and metadata subtrees from the cloned
/// content root. Removal is destructive and unconditional; removals are
/// idempotent, so their order is irrelevant.
pub struct SanitizeStage;

impl Stage for SanitizeStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if let Some(fragment) = context.fragment() {
      for selector in Self::REMOVAL_SELECTORS {
        fragment.remove(selector);
      }
    }

    Ok(())
  }
}

impl SanitizeStage {
  const REMOVAL_SELECTORS: [&'static str; 25] = [
    "#siteNotice",
    ".site-notice",
    "#mw-navigation",
    ".mw-navigation",
    "#mw-panel",
    ".mw-panel",
    ".mw-footer",
    "#footer",
    "footer",
    ".vector-header",
    ".mw-header",
    ".metadata",
    ".hatnote",
    ".toc",
    "#toc",
    ".table-of-contents",
    ".ambox",
    ".navigation-box",
    ".mw-indicators",
    ".mw-jump-link",
    ".vector-page-toolbar",
    ".vector-page-tools",
    ".vector-feature-zebra-design-disabled",
    ".mw-workspace-container",
    ".mw-page-container",
  ];
}
