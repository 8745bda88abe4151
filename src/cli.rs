// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - crawl: walk a website and record image counts per page
// - results: list what earlier crawls recorded
// =============================================================================

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::store::{SortField, SortOrder, DEFAULT_RESULTS_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "image-crawler",
    version,
    about = "Crawls a website and counts the images hosted on it, page by page",
    long_about = "image-crawler walks a website breadth-first from one entry URL, follows links \
                  that stay on the same domain, and records for every visited page how many \
                  same-domain images it shows and how long it took to process."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website and record same-domain image counts
    ///
    /// Example: image-crawler crawl https://example.com --depth 2 --page-limit 50
    Crawl {
        /// Entry URL (e.g., https://example.com)
        url: String,

        /// How many link hops to follow from the entry page (default: unlimited)
        ///
        /// Depth 0 = just the entry page
        /// Depth 1 = entry page + the pages it links to
        #[arg(long)]
        depth: Option<u32>,

        /// Maximum number of pages to visit (default: unlimited)
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        page_limit: Option<usize>,

        /// Per-page network timeout in seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// Compare hosts exactly instead of by substring
        ///
        /// Rejects look-alike hosts such as example.com.attacker.net
        #[arg(long)]
        strict_host: bool,

        /// File the page metrics are appended to
        #[arg(long, default_value = DEFAULT_RESULTS_FILE)]
        results_file: PathBuf,
    },

    /// List recorded page metrics
    ///
    /// Example: image-crawler results --sort time-spent --order asc
    Results {
        /// Column to sort by
        #[arg(long, value_enum, default_value_t = SortField::ImagesTotal)]
        sort: SortField,

        /// Sort direction
        #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
        order: SortOrder,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,

        /// File the page metrics were recorded in
        #[arg(long, default_value = DEFAULT_RESULTS_FILE)]
        results_file: PathBuf,
    },
}
