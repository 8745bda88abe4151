// src/store/metric.rs
// =============================================================================
// The per-page outcome of a crawl and the trait for recording it.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// What the crawler learned about one visited page.
///
/// Serialized as `{"url": ..., "imageCount": ..., "elapsedMillis": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetric {
    pub url: String,
    /// Images hosted by the crawled domain
    pub image_count: u64,
    /// Time spent fetching and analyzing the page
    pub elapsed_millis: u64,
}

impl PageMetric {
    pub fn new(url: impl Into<String>, image_count: u64, elapsed_millis: u64) -> Self {
        Self {
            url: url.into(),
            image_count,
            elapsed_millis,
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_millis as f64 / 1000.0
    }
}

/// Durably records page metrics, one at a time.
///
/// There is no batching: every call stands on its own, and records saved
/// before a failure stay saved.
pub trait ResultSink {
    fn save(&mut self, metric: PageMetric) -> Result<(), StoreError>;
}
