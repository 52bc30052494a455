//! Title and body extraction from article HTML.
//!
//! Pages come from WordPress-style blogs, so the body is looked up in this
//! order:
//!
//! 1. `div.td-post-content` (Newspaper theme)
//! 2. `div.entry-content` (most other themes)
//! 3. the first `<article>`
//!
//! Missing structure is not an error: the sentinels [`TITLE_NOT_FOUND`] and
//! [`BODY_NOT_FOUND`] are substituted instead.

use crate::models::{ArticleText, BODY_NOT_FOUND, TITLE_NOT_FOUND};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static HEADING_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["h1", "h2", "h3", "h4", "h5", "h6"]
        .iter()
        .map(|tag| Selector::parse(tag).unwrap())
        .collect()
});

static BODY_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    ["div.td-post-content", "div.entry-content", "article"]
        .iter()
        .map(|css| Selector::parse(css).unwrap())
        .collect()
});

static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Extract an [`ArticleText`] from raw HTML. Pure: no I/O.
pub fn extract_article(url_id: &str, html: &str) -> ArticleText {
    let document = Html::parse_document(html);
    ArticleText {
        url_id: url_id.to_string(),
        title: extract_title(&document),
        body: extract_body(&document),
    }
}

/// First heading by level (any `h1` beats every `h2`, and so on).
fn extract_title(document: &Html) -> String {
    HEADING_SELECTORS
        .iter()
        .find_map(|selector| document.select(selector).next())
        .map(element_text)
        .unwrap_or_else(|| TITLE_NOT_FOUND.to_string())
}

fn extract_body(document: &Html) -> String {
    let Some(container) = BODY_SELECTORS
        .iter()
        .find_map(|selector| document.select(selector).next())
    else {
        return BODY_NOT_FOUND.to_string();
    };

    container
        .select(&PARAGRAPH_SELECTOR)
        .map(element_text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_and_article_body() {
        let html = r#"<html><body>
            <h1> Hello </h1>
            <article><p>World test sentence.</p></article>
        </body></html>"#;
        let article = extract_article("A1", html);
        assert_eq!(article.url_id, "A1");
        assert_eq!(article.title, "Hello");
        assert_eq!(article.body, "World test sentence.");
        assert_eq!(article.to_file_contents(), "Hello\n\nWorld test sentence.");
    }

    #[test]
    fn test_title_prefers_lower_heading_level() {
        let html = "<h3>Site name</h3><h2>Section</h2><h1>Real title</h1>";
        assert_eq!(extract_article("x", html).title, "Real title");
    }

    #[test]
    fn test_title_falls_back_to_h6() {
        let html = "<h6>Tiny</h6><p>text</p>";
        assert_eq!(extract_article("x", html).title, "Tiny");
    }

    #[test]
    fn test_title_sentinel_when_no_heading() {
        let html = "<div class=\"entry-content\"><p>Body</p></div>";
        let article = extract_article("x", html);
        assert_eq!(article.title, TITLE_NOT_FOUND);
        assert_eq!(article.body, "Body");
    }

    #[test]
    fn test_body_prefers_td_post_content() {
        let html = r#"
            <article><p>article text</p></article>
            <div class="entry-content"><p>entry text</p></div>
            <div class="td-post-content tagdiv-type"><p>first</p><p> second </p></div>
        "#;
        assert_eq!(extract_article("x", html).body, "first\nsecond");
    }

    #[test]
    fn test_body_entry_content_before_article() {
        let html = r#"
            <article><p>article text</p></article>
            <div class="entry-content"><p>entry text</p></div>
        "#;
        assert_eq!(extract_article("x", html).body, "entry text");
    }

    #[test]
    fn test_body_includes_nested_paragraphs() {
        let html = r#"<div class="entry-content">
            <section><p>one <b>bold</b> word</p></section>
            <p>two</p>
        </div>"#;
        assert_eq!(extract_article("x", html).body, "one bold word\ntwo");
    }

    #[test]
    fn test_body_sentinel_when_no_container() {
        let html = "<h1>Title</h1><div><p>orphan</p></div>";
        let article = extract_article("x", html);
        assert_eq!(article.body, BODY_NOT_FOUND);
        assert_eq!(article.to_file_contents(), "Title\n\nBody Content Not Found");
    }

    #[test]
    fn test_container_without_paragraphs_gives_empty_body() {
        let html = "<h1>T</h1><article>just text</article>";
        assert_eq!(extract_article("x", html).body, "");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let html = r#"<h2>Title</h2><div class="td-post-content"><p>a</p><p>b</p></div>"#;
        let first = extract_article("x", html);
        for _ in 0..5 {
            assert_eq!(extract_article("x", html), first);
        }
    }
}
