// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (RUST_LOG, default "info", written to stderr)
// 2. Parse command-line arguments using clap
// 3. Dispatch to the crawl or results handler
// 4. Exit with proper code (0 = success, 1 = crawl aborted, 2 = bad input)
// =============================================================================

mod cli;
mod crawl;
mod error;
mod page;
mod report;
mod store;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use crawl::{CrawlOptions, CrawlWorker, DomainMatch};
use page::{HtmlAnalyzer, HttpFetcher};
use store::{JsonLinesStore, SortField, SortOrder};

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so `results --json` output stays machine-readable
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl {
            url,
            depth,
            page_limit,
            timeout,
            strict_host,
            results_file,
        } => {
            let mut options = CrawlOptions::new().with_domain_match(if strict_host {
                DomainMatch::StrictHost
            } else {
                DomainMatch::Loose
            });
            if let Some(depth) = depth {
                options = options.with_depth(depth);
            }
            if let Some(limit) = page_limit {
                options = options.with_page_limit(limit);
            }
            if let Some(secs) = timeout {
                options = options.with_timeout(Duration::from_secs(secs));
            }

            handle_crawl(&url, &options, &results_file).await
        }
        Commands::Results {
            sort,
            order,
            json,
            results_file,
        } => handle_results(&results_file, sort, order, json),
    }
}

// Handles the 'crawl' subcommand
async fn handle_crawl(url: &str, options: &CrawlOptions, results_file: &Path) -> Result<i32> {
    // Reject a bad entry URL before touching the results file
    if let Err(e) = crawl::parse_entry_url(url.trim()) {
        eprintln!("❌ {}", e);
        eprintln!("   Please provide a full URL, e.g. https://example.com");
        return Ok(2);
    }

    println!("🔍 Crawling website: {}", url.trim());
    match options.depth {
        Some(depth) => println!("📊 Max crawl depth: {}", depth),
        None => println!("📊 Max crawl depth: unlimited"),
    }
    if let Some(limit) = options.page_limit {
        println!("📄 Page limit: {}", limit);
    }

    let store = JsonLinesStore::open(results_file)
        .with_context(|| format!("could not open results file {}", results_file.display()))?;
    let fetcher = HttpFetcher::new().context("could not create HTTP client")?;
    let mut worker = CrawlWorker::new(fetcher, HtmlAnalyzer::new(), store);

    let outcome = worker.perform(url, options).await;
    let recorded = worker.sink().written();
    let results_path = worker.sink().path().display().to_string();

    match outcome {
        Ok(()) => {
            println!(
                "✅ Task completed: {} page(s) recorded in {}",
                recorded, results_path
            );
            println!("   Run `image-crawler results` to see them");
            Ok(0)
        }
        Err(e) if e.is_invalid_input() => {
            eprintln!("❌ {}", e);
            Ok(2)
        }
        Err(e) => {
            eprintln!("❌ Crawl aborted: {}", e);
            eprintln!("   {} page(s) were recorded before the failure", recorded);
            Ok(1)
        }
    }
}

// Handles the 'results' subcommand
fn handle_results(results_file: &Path, sort: SortField, order: SortOrder, json: bool) -> Result<i32> {
    let mut metrics = JsonLinesStore::load(results_file)
        .with_context(|| format!("could not read results file {}", results_file.display()))?;

    if metrics.is_empty() && !json {
        println!("⚠️  No results recorded in {}", results_file.display());
        return Ok(0);
    }

    store::sort_metrics(&mut metrics, sort, order);
    report::print_results(&metrics, json, sort, order)?;
    Ok(0)
}
