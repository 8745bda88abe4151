// src/error.rs
// =============================================================================
// Error types shared by the crawl core and its collaborators.
//
// The crawl only ever recovers from one kind of problem on its own: a page
// that answers with a non-success HTTP status. That case never shows up here,
// the fetcher simply hands back an empty page. Everything below aborts the
// crawl and is returned to the caller of `CrawlWorker::perform`.
//
// Rust concepts:
// - thiserror: derive macro that implements Display and Error for enums
// - #[from]: lets the `?` operator convert one error type into another
// =============================================================================

use thiserror::Error;

/// A network-level failure while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("request to {url} timed out")]
    Timeout { url: String },

    /// The host could not be reached (DNS failure, connection refused, ...)
    #[error("could not connect to {url}: {message}")]
    Connect { url: String, message: String },

    /// Any other transport error reported by the HTTP client
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// A failure while writing or reading the results file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("results file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode page metric: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("malformed record on line {line}: {source}")]
    Serialization {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything that can end a crawl early.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The entry URL could not be turned into a host to crawl
    #[error("invalid entry URL '{url}': {reason}")]
    InvalidEntryUrl { url: String, reason: String },

    /// A page fetch failed at the network layer
    #[error(transparent)]
    Transport(#[from] FetchError),

    /// A page metric could not be recorded
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl CrawlError {
    /// True when the failure came from user input rather than the crawl itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CrawlError::InvalidEntryUrl { .. })
    }
}
