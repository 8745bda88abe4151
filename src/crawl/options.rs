// src/crawl/options.rs
// =============================================================================
// Settings for a single crawl run.
//
// Every limit is optional. `None` means "no limit" for depth and page budget,
// and "whatever the fetcher defaults to" for the timeout.
// =============================================================================

use std::time::Duration;

/// How URLs are compared against the entry URL's host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DomainMatch {
    /// Substring containment: `//host` (links) or `//host` / `.host` (images)
    /// anywhere in the URL. Accepts look-alikes such as
    /// `https://cdn.example.com.attacker.net`.
    #[default]
    Loose,
    /// Parses the URL and compares hosts exactly (images may also come from
    /// subdomains).
    StrictHost,
}

#[derive(Debug, Clone, Default)]
pub struct CrawlOptions {
    /// Links at this depth are visited but not expanded
    pub depth: Option<u32>,
    /// Maximum number of pages to visit
    pub page_limit: Option<usize>,
    /// Per-fetch network timeout
    pub timeout: Option<Duration>,
    pub domain_match: DomainMatch,
}

impl CrawlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_domain_match(mut self, domain_match: DomainMatch) -> Self {
        self.domain_match = domain_match;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let options = CrawlOptions::default();
        assert_eq!(options.depth, None);
        assert_eq!(options.page_limit, None);
        assert_eq!(options.timeout, None);
        assert_eq!(options.domain_match, DomainMatch::Loose);
    }

    #[test]
    fn test_builder_sets_fields() {
        let options = CrawlOptions::new()
            .with_depth(2)
            .with_page_limit(10)
            .with_timeout(Duration::from_secs(5))
            .with_domain_match(DomainMatch::StrictHost);

        assert_eq!(options.depth, Some(2));
        assert_eq!(options.page_limit, Some(10));
        assert_eq!(options.timeout, Some(Duration::from_secs(5)));
        assert_eq!(options.domain_match, DomainMatch::StrictHost);
    }
}
