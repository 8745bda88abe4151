// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a URL
// - Same-domain restriction (doesn't crawl external sites)
// - Optional depth limit and page budget
// - Skips scripts, archives, feeds, PDFs and fragment links
//
// Submodules:
// - link: a URL plus its depth
// - frontier: the queue of pending links and the set of visited URLs
// - options: per-crawl settings
// - policy: which images count and which links get followed
// - worker: the crawl loop itself
// =============================================================================

mod frontier;
mod link;
mod options;
mod policy;
mod worker;

pub use options::{CrawlOptions, DomainMatch};
pub use worker::{parse_entry_url, CrawlWorker};
