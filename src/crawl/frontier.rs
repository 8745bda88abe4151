// src/crawl/frontier.rs
// =============================================================================
// The crawl frontier: links waiting to be visited plus URLs already visited.
//
// How it works:
// 1. New links go to the back of a FIFO queue (VecDeque)
// 2. The crawl loop pulls links from the front, one at a time
// 3. Once a page has been fetched and analyzed its URL goes into the
//    processed set, which the loop consults before visiting or enqueuing
//
// The queue itself does not deduplicate. The same URL can sit in it several
// times; the processed check at dequeue time keeps it from being visited twice.
//
// Rust concepts:
// - VecDeque: push_back() adds to the end, pop_front() removes from the start
// - HashSet: O(1) membership checks for visited URLs
// - Iterator: the frontier itself is the lazy "next link" sequence
// =============================================================================

use std::collections::{HashSet, VecDeque};

use super::link::Link;

/// FIFO queue of pending links and the set of URLs already processed.
///
/// One frontier belongs to exactly one crawl run; nothing is shared between
/// runs, so there is no locking.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Link>,
    processed_urls: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link to the back of the queue. Does not check for duplicates.
    pub fn append(&mut self, url: impl Into<String>, depth: u32) {
        self.queue.push_back(Link::new(url, depth));
    }

    /// Pushes an already-built link to the back of the queue.
    pub fn push(&mut self, link: Link) {
        self.queue.push_back(link);
    }

    /// Whether `url` (with or without a trailing slash) was already processed
    pub fn processed(&self, url: &str) -> bool {
        self.processed_urls.contains(normalize(url))
    }

    /// Marks `url` as processed. Calling it twice for the same page is a no-op.
    pub fn add_processed(&mut self, url: &str) {
        let key = normalize(url);
        if !self.processed_urls.contains(key) {
            self.processed_urls.insert(key.to_string());
        }
    }

    /// Number of distinct URLs processed so far
    pub fn processed_size(&self) -> usize {
        self.processed_urls.len()
    }

    /// Links still waiting in the queue (duplicates included)
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Consuming the frontier as an iterator is the only way links leave the
/// queue. It ends as soon as the queue is empty, but links appended after
/// that are picked up again by the next call.
impl Iterator for Frontier {
    type Item = Link;

    fn next(&mut self) -> Option<Link> {
        self.queue.pop_front()
    }
}

/// `https://example.com/docs/` and `https://example.com/docs` are the same page
fn normalize(url: &str) -> &str {
    url.trim_end_matches('/')
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why implement Iterator instead of returning a drain?
//    - A drain would borrow the whole frontier until it is dropped
//    - The crawl loop must append new links while it is still pulling links
//    - `while let Some(link) = frontier.next()` borrows only for one call
//
// 2. Why trim_end_matches('/') and not a full URL parse?
//    - Only the trailing slash matters for identity here
//    - It returns a &str slice of the input, so lookups allocate nothing
// -----------------------------------------------------------------------------
