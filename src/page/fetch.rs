// src/page/fetch.rs
// =============================================================================
// Downloads raw page content over HTTP.
//
// Key behavior:
// - One reqwest Client is built up front and reused for every page
//   (connection pooling)
// - A per-crawl timeout, when given, overrides the client default per request
// - Non-success status codes (404, 500, ...) are NOT errors: the page is
//   treated as empty and the crawl moves on
// - Network failures (timeout, DNS, refused connection) ARE errors and end
//   the crawl
//
// Rust concepts:
// - async-trait: lets a trait have async methods, so tests can swap in a fake
// - Result<T, E>: the fetch either yields bytes or a FetchError
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::FetchError;

/// Used when the crawl does not configure its own timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = concat!("image-crawler/", env!("CARGO_PKG_VERSION"));

/// Retrieves the raw content behind a URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Returns the body for a successful response and empty content for any
    /// non-success status. Errors only on transport-level failures.
    async fn fetch(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError>;
}

/// PageFetcher backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_default_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_default_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>, FetchError> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| categorize_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(url, status = status.as_u16(), "non-success response, treating page as empty");
            return Ok(Vec::new());
        }

        let body = response.bytes().await.map_err(|e| categorize_error(url, e))?;
        Ok(body.to_vec())
    }
}

// Sorts reqwest errors into the FetchError variants
//
// Timeouts and connection failures get their own variants so the crawl
// summary can say what went wrong; everything else keeps the original error.
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();
    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            message: error.to_string(),
        }
    } else {
        FetchError::Request { url, source: error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body("<html><body>hello</body></html>")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher.fetch(&server.url(), None).await.unwrap();

        assert_eq!(body, b"<html><body>hello</body></html>".to_vec());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_empty_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher
            .fetch(&format!("{}/missing", server.url()), None)
            .await
            .unwrap();

        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_empty_page() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/broken")
            .with_status(500)
            .with_body("Error")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher
            .fetch(&format!("{}/broken", server.url()), Some(Duration::from_secs(5)))
            .await
            .unwrap();

        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_refused_connection_is_connect_error() {
        // Port 1 on localhost is essentially never listening
        let fetcher = HttpFetcher::new().unwrap();
        let result = fetcher
            .fetch("http://127.0.0.1:1/", Some(Duration::from_secs(5)))
            .await;

        match result {
            Err(FetchError::Connect { url, .. }) => assert_eq!(url, "http://127.0.0.1:1/"),
            other => panic!("expected a connect error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_timeout_overrides_default() {
        // Accepts connections but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let fetcher = HttpFetcher::new().unwrap();
        let url = format!("http://{}/", addr);
        let started = std::time::Instant::now();
        let result = fetcher.fetch(&url, Some(Duration::from_millis(300))).await;

        match result {
            Err(FetchError::Timeout { url: timed_out }) => assert_eq!(timed_out, url),
            other => panic!("expected a timeout, got {:?}", other),
        }
        // Well under the 60 second client default
        assert!(started.elapsed() < Duration::from_secs(10));

        server.abort();
    }
}
