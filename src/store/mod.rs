// src/store/mod.rs
// =============================================================================
// Where page metrics end up.
//
// Submodules:
// - metric: PageMetric and the ResultSink trait the crawl loop writes to
// - jsonl: the results file (append while crawling, load for listing)
// - sort: ordering for the `results` command
// =============================================================================

mod jsonl;
mod metric;
mod sort;

pub use jsonl::{JsonLinesStore, DEFAULT_RESULTS_FILE};
pub use metric::{PageMetric, ResultSink};
pub use sort::{sort_metrics, SortField, SortOrder};
