use super::*;

/// Guards against under-sized output and assembles the final document.
///
/// When the sanitized fragment is too short, content is regenerated from
/// paragraph text in the original, unmodified document; when nothing
/// qualifies, a placeholder is synthesized. Either way the pipeline never
/// returns a near-empty article body, and recovery is a content-quality
/// guarantee rather than an error.
pub struct ComposeStage;

impl Stage for ComposeStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let markup = context
      .fragment()
      .map(ContentFragment::markup)
      .unwrap_or_default()
      .trim()
      .to_string();

    let content =
      if markup.chars().count() < context.options().min_content_length {
        context.logger().warn(format!(
          "Content too short for {}, using fallback",
          context.source_url()
        ));

        Self::recover(
          context.document(),
          context.title(),
          context.options().min_paragraph_length,
        )
      } else {
        markup
      };

    let document = Self::assemble(context.title(), &content);

    context.set_content(document);

    Ok(())
  }
}

impl ComposeStage {
  const FALLBACK_NOTICE: &'static str =
    "Content structure not recognized. Please try another article.";

  fn recover(
    document: &Document,
    title: &str,
    min_paragraph_length: usize,
  ) -> String {
    let mut paragraphs = Vec::new();

    for node in document.select("body p").nodes() {
      let text = Selection::from(*node).text().trim().to_string();

      if text.chars().count() > min_paragraph_length {
        paragraphs.push(format!("<p>{text}</p>"));
      }
    }

    if paragraphs.is_empty() {
      Self::placeholder(title)
    } else {
      paragraphs.join("\n")
    }
  }

  fn placeholder(title: &str) -> String {
    format!(
      "<div style=\"padding:20px;font-family:Arial;\">\n<h1>{title}</h1>\n<p>{}</p>\n</div>",
      Self::FALLBACK_NOTICE
    )
  }

  /// Minimal standalone document: fixed doctype, UTF-8 charset, level-one
  /// title heading, then the content fragment. No external styles or scripts,
  /// so the result embeds safely in a sandboxed display surface.
  fn assemble(title: &str, content: &str) -> String {
    format!(
      "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n</head>\n\
       <body>\n<h1>{title}</h1>\n{content}\n</body>\n</html>"
    )
  }
}
