// src/crawl/worker.rs
// =============================================================================
// The crawl loop.
//
// How it works:
// 1. Work out the domain from the entry URL and seed the frontier with it
//    at depth 0
// 2. Take the next link from the front of the frontier
// 3. Stop if the page budget is used up; skip the link if it was already
//    visited
// 4. Fetch the page, find its images and links, count the images hosted by
//    the domain, and record a PageMetric
// 5. Unless the link sits at the depth limit, append every qualifying link
//    one level deeper
// 6. Repeat until the frontier is empty or the budget is reached
//
// Pages are handled strictly one after another. The only waiting happens in
// the fetch and in saving the metric.
//
// Rust concepts:
// - Generics: the worker is generic over its fetcher, analyzer and sink, so
//   tests can plug in fakes without any dynamic dispatch
// - The `?` operator: any fetch or save error ends the crawl right there
// =============================================================================

use std::time::{Duration, Instant};

use tracing::{debug, info, trace, warn};
use url::Url;

use super::frontier::Frontier;
use super::link::Link;
use super::options::CrawlOptions;
use super::policy::DomainPolicy;
use crate::error::CrawlError;
use crate::page::{PageAnalyzer, PageFetcher};
use crate::store::{PageMetric, ResultSink};

/// Drives crawls using one fetcher, one analyzer and one result sink.
///
/// The worker itself keeps no crawl state between runs: every call to
/// [`CrawlWorker::perform`] starts from an empty frontier.
pub struct CrawlWorker<F, A, S> {
    fetcher: F,
    analyzer: A,
    sink: S,
}

/// State of a single crawl run, created by `perform` and dropped at its end.
struct CrawlSession {
    policy: DomainPolicy,
    frontier: Frontier,
    depth_limit: Option<u32>,
    page_limit: Option<usize>,
    timeout: Option<Duration>,
}

impl<F, A, S> CrawlWorker<F, A, S>
where
    F: PageFetcher,
    A: PageAnalyzer,
    S: ResultSink,
{
    pub fn new(fetcher: F, analyzer: A, sink: S) -> Self {
        Self {
            fetcher,
            analyzer,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Crawls the site behind `entry_url` breadth-first.
    ///
    /// Returns once the frontier is empty or the page budget is reached; both
    /// are normal endings. Fails before fetching anything if the entry URL has
    /// no usable host, and aborts on the first transport or persistence error.
    /// Metrics saved before an error stay saved.
    pub async fn perform(&mut self, entry_url: &str, options: &CrawlOptions) -> Result<(), CrawlError> {
        let mut session = CrawlSession::start(entry_url, options)?;

        info!(
            entry_url = entry_url.trim(),
            domain = session.policy.domain(),
            depth = ?session.depth_limit,
            page_limit = ?session.page_limit,
            "starting crawl"
        );

        while let Some(link) = session.frontier.next() {
            if session.budget_exhausted() {
                warn!(
                    visited = session.frontier.processed_size(),
                    dropped = session.frontier.pending() + 1,
                    "page limit reached, dropping remaining links"
                );
                break;
            }

            if session.frontier.processed(link.url()) {
                debug!(url = link.url(), "already visited, skipping");
                continue;
            }

            let found = self.visit(&mut session, &link).await?;
            session.expand(&link, found);
        }

        info!(pages = session.frontier.processed_size(), "crawl finished");
        Ok(())
    }

    // Fetches, analyzes and records one page. Returns the links found on it.
    async fn visit(&mut self, session: &mut CrawlSession, link: &Link) -> Result<Vec<String>, CrawlError> {
        let started = Instant::now();

        let content = self.fetcher.fetch(link.url(), session.timeout).await?;
        let page = self.analyzer.extract(&content, link.url());
        let image_count = page
            .images
            .iter()
            .filter(|uri| session.policy.hosts_image(uri))
            .count() as u64;

        session.frontier.add_processed(link.url());

        let elapsed_millis = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        debug!(
            url = link.url(),
            depth = link.depth(),
            images = image_count,
            elapsed_ms = elapsed_millis,
            "page visited"
        );

        self.sink
            .save(PageMetric::new(link.url(), image_count, elapsed_millis))?;

        Ok(page.links)
    }
}

impl CrawlSession {
    fn start(entry_url: &str, options: &CrawlOptions) -> Result<Self, CrawlError> {
        let entry = parse_entry_url(entry_url.trim())?;
        let domain = entry.host_str().unwrap_or_default().to_string();

        // Seed with the parsed form so links resolved back to the entry page
        // (lowercased host, default port dropped) match it in the processed set
        let mut frontier = Frontier::new();
        frontier.append(entry.as_str(), 0);

        Ok(Self {
            policy: DomainPolicy::new(domain, options.domain_match),
            frontier,
            depth_limit: options.depth,
            page_limit: options.page_limit,
            timeout: options.timeout,
        })
    }

    fn budget_exhausted(&self) -> bool {
        self.page_limit
            .is_some_and(|limit| self.frontier.processed_size() >= limit)
    }

    // Queues the qualifying links found on `parent`, one level deeper
    fn expand(&mut self, parent: &Link, found: Vec<String>) {
        if let Some(limit) = self.depth_limit {
            if parent.depth() >= limit {
                debug!(url = parent.url(), depth = parent.depth(), "depth limit reached, not expanding");
                return;
            }
        }

        for uri in found {
            if self.policy.qualifies(&uri, &self.frontier) {
                self.frontier.push(parent.child(uri));
            } else {
                trace!(url = %uri, "link rejected");
            }
        }
    }
}

/// Parses the entry URL. Its host becomes the crawl's domain.
///
/// The URL must be written as `http://` or `https://` followed by a host;
/// shorthand like `https:example.com` is refused even though it would parse.
pub fn parse_entry_url(entry_url: &str) -> Result<Url, CrawlError> {
    let invalid = |reason: String| CrawlError::InvalidEntryUrl {
        url: entry_url.to_string(),
        reason,
    };

    if !entry_url.contains("://") {
        return Err(invalid("expected a scheme followed by '://'".to_string()));
    }

    let url = Url::parse(entry_url).map_err(|e| invalid(e.to_string()))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(invalid("URL has no host".to_string())),
    }
}
