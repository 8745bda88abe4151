// src/store/sort.rs
// =============================================================================
// Ordering of stored page metrics for the `results` listing.
// =============================================================================

use clap::ValueEnum;

use super::metric::PageMetric;

/// Column to sort the listing by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Url,
    #[default]
    ImagesTotal,
    TimeSpent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// The order a "sort again" on the same column would switch to
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Sorts in place. Records that compare equal keep their file order.
pub fn sort_metrics(metrics: &mut [PageMetric], field: SortField, order: SortOrder) {
    metrics.sort_by(|a, b| {
        let ordering = match field {
            SortField::Url => a.url.cmp(&b.url),
            SortField::ImagesTotal => a.image_count.cmp(&b.image_count),
            SortField::TimeSpent => a.elapsed_millis.cmp(&b.elapsed_millis),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<PageMetric> {
        vec![
            PageMetric::new("https://example.com/b", 3, 200),
            PageMetric::new("https://example.com/a", 7, 50),
            PageMetric::new("https://example.com/c", 3, 10),
        ]
    }

    fn urls(metrics: &[PageMetric]) -> Vec<&str> {
        metrics.iter().map(|m| m.url.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_images_desc() {
        let mut metrics = sample();
        sort_metrics(&mut metrics, SortField::default(), SortOrder::default());
        // b and c tie on images and keep their original order
        assert_eq!(
            urls(&metrics),
            vec![
                "https://example.com/a",
                "https://example.com/b",
                "https://example.com/c"
            ]
        );
    }

    #[test]
    fn test_sort_by_url_asc() {
        let mut metrics = sample();
        sort_metrics(&mut metrics, SortField::Url, SortOrder::Asc);
        assert_eq!(
            urls(&metrics),
            vec![
                "https://example.com/a",
                "https://example.com/b",
                "https://example.com/c"
            ]
        );
    }

    #[test]
    fn test_sort_by_time_spent_asc() {
        let mut metrics = sample();
        sort_metrics(&mut metrics, SortField::TimeSpent, SortOrder::Asc);
        assert_eq!(
            urls(&metrics),
            vec![
                "https://example.com/c",
                "https://example.com/a",
                "https://example.com/b"
            ]
        );
    }

    #[test]
    fn test_toggled() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
    }
}
