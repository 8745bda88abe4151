// src/page/mod.rs
// =============================================================================
// Everything the crawler needs to know about a single page.
//
// Submodules:
// - fetch: downloads raw page content (PageFetcher, HttpFetcher)
// - analyze: finds image and link URLs in that content (PageAnalyzer,
//   HtmlAnalyzer)
//
// Both are traits so the crawl loop can be driven by fakes in tests.
// =============================================================================

mod analyze;
mod fetch;

pub use analyze::{HtmlAnalyzer, PageAnalyzer};
pub use fetch::{HttpFetcher, PageFetcher};
