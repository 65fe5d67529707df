use {
  pretty_assertions::assert_eq,
  wiki_explorer::{ExtractOptions, Extractor, LogHandle},
};

const SOURCE_URL: &str = "https://en.wikipedia.org/wiki/Example";

fn extract(html: &str) -> wiki_explorer::Article {
  extract_from(html, SOURCE_URL)
}

fn extract_from(html: &str, url: &str) -> wiki_explorer::Article {
  Extractor::new(html, url, ExtractOptions::default())
    .expect("markup should parse")
    .extract(&LogHandle::disabled())
    .expect("extraction should succeed")
}

fn long_paragraph() -> String {
  "The quick brown fox jumps over the lazy dog. ".repeat(4)
}

#[test]
fn extracts_title_content_and_links_from_a_typical_article() {
  let html = format!(
    "<html><body>\
     <h1 id=\"firstHeading\">Example</h1>\
     <div id=\"mw-content-text\">\
     <p>{}</p>\
     <a href=\"/wiki/Dog\">Dog</a>\
     <div class=\"mw-panel\">navigation chrome</div>\
     </div>\
     </body></html>",
    long_paragraph()
  );

  let article = extract(&html);

  assert_eq!(article.title, "Example");
  assert_eq!(article.links, vec!["https://en.wikipedia.org/wiki/Dog"]);
  assert!(article.content.starts_with("<!DOCTYPE html>"));
  assert!(article.content.contains("<h1>Example</h1>"));
  assert!(article.content.contains("The quick brown fox"));
  assert!(!article.content.contains("navigation chrome"));
  assert!(!article.content.contains("mw-panel"));
}

#[test]
fn rewritten_links_point_at_the_source_language_domain() {
  let html = "<html><body>\
              <h1 id=\"firstHeading\">Пример</h1>\
              <div id=\"mw-content-text\">\
              <p>Короткий текст.</p>\
              <a href=\"/wiki/%D0%9A%D0%BE%D1%82\">Кот</a>\
              </div>\
              </body></html>";

  let article = extract_from(
    html,
    "https://ru.wikipedia.org/wiki/%D0%9F%D1%80%D0%B8%D0%BC%D0%B5%D1%80",
  );

  assert_eq!(
    article.links,
    vec!["https://ru.wikipedia.org/wiki/%D0%9A%D0%BE%D1%82"]
  );
}

#[test]
fn namespace_and_anchor_links_are_rewritten_but_not_collected() {
  let html = format!(
    "<html><body>\
     <div id=\"mw-content-text\">\
     <p>{}</p>\
     <a href=\"/wiki/Category:Mammals\">Category</a>\
     <a href=\"/wiki/Dog#Breeds\">Breeds</a>\
     <a href=\"/wiki/Cat\">Cat</a>\
     </div>\
     </body></html>",
    long_paragraph()
  );

  let article = extract(&html);

  assert_eq!(article.links, vec!["https://en.wikipedia.org/wiki/Cat"]);
  assert!(article
    .content
    .contains("https://en.wikipedia.org/wiki/Category:Mammals"));
}

#[test]
fn short_content_is_recovered_from_body_paragraphs() {
  let recovery = long_paragraph();
  let html = format!(
    "<html><body>\
     <h1 id=\"firstHeading\">Stub</h1>\
     <div id=\"mw-content-text\"><p>tiny</p></div>\
     <p>{recovery}</p>\
     </body></html>"
  );

  let article = extract(&html);

  assert!(article.content.contains(recovery.trim()));
}

#[test]
fn unrecognized_structure_produces_the_placeholder_document() {
  let html = "<html><body><span>nothing recognizable</span></body></html>";

  let article = extract(html);

  assert_eq!(article.title, "Article");
  assert!(article
    .content
    .contains("Content structure not recognized. Please try another article."));
  assert_eq!(article.links, Vec::<String>::new());
}

#[test]
fn duplicate_article_links_are_collected_once_in_order() {
  let html = format!(
    "<html><body>\
     <div id=\"mw-content-text\">\
     <p>{}</p>\
     <a href=\"/wiki/Dog\">Dog</a>\
     <a href=\"/wiki/Cat\">Cat</a>\
     <a href=\"/wiki/Dog\">Dog again</a>\
     </div>\
     </body></html>",
    long_paragraph()
  );

  let article = extract(&html);

  assert_eq!(
    article.links,
    vec![
      "https://en.wikipedia.org/wiki/Dog",
      "https://en.wikipedia.org/wiki/Cat"
    ]
  );
}
