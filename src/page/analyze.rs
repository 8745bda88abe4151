// src/page/analyze.rs
// =============================================================================
// Pulls image and link URLs out of an HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Never fails on broken markup, it just does its best
//
// Every URL is resolved against the page's own URL, so "/logo.png" on
// https://example.com/about becomes https://example.com/logo.png.
// =============================================================================

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

/// Absolute image and link URIs found on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub images: Vec<String>,
    pub links: Vec<String>,
}

/// Extracts images and anchors from raw page content.
pub trait PageAnalyzer {
    fn extract(&self, content: &[u8], base_url: &str) -> PageLinks;
}

/// PageAnalyzer that parses HTML with scraper.
///
/// Images are `<img src>` elements inside `<body>`, links are `<a href>`.
#[derive(Debug)]
pub struct HtmlAnalyzer {
    images: Selector,
    links: Selector,
}

impl HtmlAnalyzer {
    pub fn new() -> Self {
        // Constant selectors, known to be valid
        Self {
            images: Selector::parse("body img[src]").unwrap(),
            links: Selector::parse("a[href]").unwrap(),
        }
    }
}

impl Default for HtmlAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAnalyzer for HtmlAnalyzer {
    fn extract(&self, content: &[u8], base_url: &str) -> PageLinks {
        if content.is_empty() {
            return PageLinks::default();
        }

        let base = match Url::parse(base_url) {
            Ok(url) => url,
            Err(_) => {
                warn!(base_url, "invalid base URL, skipping page analysis");
                return PageLinks::default();
            }
        };

        let html = String::from_utf8_lossy(content);
        let document = Html::parse_document(&html);

        let images = document
            .select(&self.images)
            .filter_map(|element| element.value().attr("src"))
            .filter_map(|src| resolve_url(&base, src))
            .collect();

        let links = document
            .select(&self.links)
            .filter_map(|element| element.value().attr("href"))
            .filter_map(|href| resolve_url(&base, href))
            .collect();

        PageLinks { images, links }
    }
}

// Resolves a possibly-relative URL against the page URL
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs"              -> Some("https://example.com/docs")
//   href = "https://other.com"  -> Some("https://other.com/")
//   href = "http://[::1"        -> None (unparsable)
fn resolve_url(base: &Url, href: &str) -> Option<String> {
    base.join(href.trim()).ok().map(|url| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str, base: &str) -> PageLinks {
        HtmlAnalyzer::new().extract(html.as_bytes(), base)
    }

    #[test]
    fn test_resolves_relative_images_and_links() {
        let html = r#"
            <html><body>
                <img src="/logo.png">
                <img src="photo.jpg">
                <a href="/docs">Docs</a>
                <a href="../about">About</a>
            </body></html>
        "#;
        let page = extract(html, "https://example.com/blog/post");

        assert_eq!(
            page.images,
            vec![
                "https://example.com/logo.png",
                "https://example.com/blog/photo.jpg"
            ]
        );
        assert_eq!(
            page.links,
            vec!["https://example.com/docs", "https://example.com/about"]
        );
    }

    #[test]
    fn test_keeps_absolute_and_external_urls() {
        let html = r#"<body><img src="https://cdn.other.org/a.png"><a href="https://other.org">x</a></body>"#;
        let page = extract(html, "https://example.com");

        assert_eq!(page.images, vec!["https://cdn.other.org/a.png"]);
        assert_eq!(page.links, vec!["https://other.org/"]);
    }

    #[test]
    fn test_img_without_src_is_ignored() {
        let html = r#"<body><img alt="no source"><img src="/a.png"></body>"#;
        let page = extract(html, "https://example.com");
        assert_eq!(page.images.len(), 1);
    }

    #[test]
    fn test_fragment_links_resolve_against_page() {
        let html = "<body><a href=\"#top\">Top</a></body>";
        let page = extract(html, "https://example.com/page");
        assert_eq!(page.links, vec!["https://example.com/page#top"]);
    }

    #[test]
    fn test_empty_content_yields_nothing() {
        let page = HtmlAnalyzer::new().extract(b"", "https://example.com");
        assert_eq!(page, PageLinks::default());
    }

    #[test]
    fn test_malformed_markup_is_best_effort() {
        let html = "<body><div><img src='/a.png'><p>unclosed <a href='/next'>next";
        let page = extract(html, "https://example.com");
        assert_eq!(page.images, vec!["https://example.com/a.png"]);
        assert_eq!(page.links, vec!["https://example.com/next"]);
    }

    #[test]
    fn test_invalid_base_url_yields_nothing() {
        let page = extract("<body><img src='/a.png'></body>", "not a url");
        assert_eq!(page, PageLinks::default());
    }
}
