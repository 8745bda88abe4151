// src/crawl/link.rs
// =============================================================================
// A discovered link: a URL plus how many hops it sits from the entry page.
//
// Links are never changed after they are created. The entry URL gets depth 0,
// every link found on a page at depth `d` gets depth `d + 1`.
// =============================================================================

/// A URL waiting in the frontier, tagged with its BFS depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    url: String,
    depth: u32,
}

impl Link {
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Hop count from the entry URL
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Builds a link one level below this one.
    pub fn child(&self, url: impl Into<String>) -> Self {
        Self::new(url, self.depth + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_is_one_level_deeper() {
        let root = Link::new("https://example.com", 0);
        let child = root.child("https://example.com/about");
        assert_eq!(child.depth(), 1);
        assert_eq!(child.url(), "https://example.com/about");
        assert_eq!(child.child("https://example.com/team").depth(), 2);
    }
}
