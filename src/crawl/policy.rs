// src/crawl/policy.rs
// =============================================================================
// Decides which images count and which links are worth following.
//
// Two tests, both relative to the entry URL's host ("the domain"):
// - Images count when they are hosted by the domain. In loose mode that means
//   the URI contains `//domain` or `.domain` anywhere.
// - Links are followed when they point at the domain (`//domain` in loose
//   mode), are not already processed, and are not scripts, archives, feeds,
//   PDFs or in-page fragments.
//
// Loose mode is plain substring matching on purpose: images served from
// subdomains count, and no URL parsing happens on the hot path. It also lets
// through hosts like `example.com.attacker.net`; strict mode parses the URL
// and compares hosts instead.
// =============================================================================

use url::Url;

use super::frontier::Frontier;
use super::options::DomainMatch;

/// URL endings that are never crawled
const BLOCKED_EXTENSIONS: [&str; 5] = [".js", ".ts", ".gz", ".xml", ".pdf"];

/// Domain and filtering rules for one crawl run.
#[derive(Debug, Clone)]
pub struct DomainPolicy {
    domain: String,
    mode: DomainMatch,
}

impl DomainPolicy {
    pub fn new(domain: impl Into<String>, mode: DomainMatch) -> Self {
        Self {
            domain: domain.into(),
            mode,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether an image URI counts towards the page's image total
    pub fn hosts_image(&self, uri: &str) -> bool {
        match self.mode {
            DomainMatch::Loose => {
                uri.contains(&format!("//{}", self.domain))
                    || uri.contains(&format!(".{}", self.domain))
            }
            DomainMatch::StrictHost => match host_of(uri) {
                Some(host) => host == self.domain || host.ends_with(&format!(".{}", self.domain)),
                None => false,
            },
        }
    }

    /// Whether an anchor target points at the crawled site
    pub fn is_internal_link(&self, uri: &str) -> bool {
        match self.mode {
            DomainMatch::Loose => uri.contains(&format!("//{}", self.domain)),
            DomainMatch::StrictHost => host_of(uri).is_some_and(|host| host == self.domain),
        }
    }

    /// Full check applied to every anchor before it is appended to the frontier.
    ///
    /// Only the processed set is consulted; a link already waiting in the queue
    /// passes again and is filtered when it is dequeued.
    pub fn qualifies(&self, uri: &str, frontier: &Frontier) -> bool {
        !frontier.processed(uri) && self.is_internal_link(uri) && !is_blocked(uri)
    }
}

/// Scripts, archives, feeds, PDFs and anything with a `#` fragment
pub fn is_blocked(uri: &str) -> bool {
    uri.contains('#') || BLOCKED_EXTENSIONS.iter().any(|ext| uri.ends_with(ext))
}

fn host_of(uri: &str) -> Option<String> {
    Url::parse(uri)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
}
