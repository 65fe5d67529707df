use super::*;

mod compose;
mod locate_content;
mod rewrite_images;
mod rewrite_links;
mod sanitize;
mod title;

pub use {
  compose::ComposeStage, locate_content::LocateContentStage,
  rewrite_images::RewriteImagesStage, rewrite_links::RewriteLinksStage,
  sanitize::SanitizeStage, title::TitleStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
