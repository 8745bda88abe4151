// src/report.rs
// =============================================================================
// Prints stored page metrics, either as a table or as JSON.
// =============================================================================

use anyhow::Result;
use clap::ValueEnum;

use crate::store::{PageMetric, SortField, SortOrder};

/// Prints the metrics either as a table or JSON
pub fn print_results(metrics: &[PageMetric], json: bool, sort: SortField, order: SortOrder) -> Result<()> {
    if json {
        let json_output = serde_json::to_string_pretty(metrics)?;
        println!("{}", json_output);
    } else {
        print_table(metrics, sort, order);
    }
    Ok(())
}

fn print_table(metrics: &[PageMetric], sort: SortField, order: SortOrder) {
    println!("{:<70} {:>8} {:>12}", "URL", "IMAGES", "TIME (s)");
    println!("{}", "=".repeat(92));

    for metric in metrics {
        println!(
            "{:<70} {:>8} {:>12.3}",
            truncate_url(&metric.url, 70),
            metric.image_count,
            metric.elapsed_seconds()
        );
    }

    println!();

    let total_images: u64 = metrics.iter().map(|m| m.image_count).sum();
    println!("📊 Summary:");
    println!("   📄 Pages: {}", metrics.len());
    println!("   🖼️  Images: {}", total_images);
    println!(
        "   ↕️  Sorted by {} ({}), use --order {} to reverse",
        value_name(sort),
        value_name(order),
        value_name(order.toggled())
    );
}

// Keeps long URLs from breaking the table layout
fn truncate_url(url: &str, width: usize) -> String {
    if url.chars().count() <= width {
        return url.to_string();
    }
    let kept: String = url.chars().take(width - 3).collect();
    format!("{}...", kept)
}

// The name clap uses for a value, e.g. "images-total"
fn value_name<T: ValueEnum>(value: T) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_url_unchanged() {
        assert_eq!(truncate_url("https://example.com", 70), "https://example.com");
    }

    #[test]
    fn test_truncate_long_url() {
        let url = format!("https://example.com/{}", "a".repeat(100));
        let shown = truncate_url(&url, 30);
        assert_eq!(shown.chars().count(), 30);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_value_names_match_cli() {
        assert_eq!(value_name(SortField::ImagesTotal), "images-total");
        assert_eq!(value_name(SortField::TimeSpent), "time-spent");
        assert_eq!(value_name(SortOrder::Desc), "desc");
    }
}
