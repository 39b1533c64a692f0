use crate::outcome::Outcome;
use crate::scrapers::Scraper;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct AppState {
    pub scraper: Scraper,
    pub stats: SessionStats,
}

impl AppState {
    pub fn new(scraper: Scraper) -> Self {
        Self {
            scraper,
            stats: SessionStats::default(),
        }
    }
}

/// Extraction counters for the lifetime of the server.
#[derive(Debug, Default)]
pub struct SessionStats {
    total: AtomicUsize,
    successful: AtomicUsize,
    failed: AtomicUsize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Percentage, 0 when nothing has been attempted yet.
    pub success_rate: f64,
}

impl SessionStats {
    pub fn record(&self, outcome: &Outcome) {
        self.total.fetch_add(1, Ordering::Relaxed);
        if outcome.is_success() {
            self.successful.fetch_add(1, Ordering::Relaxed);
        } else {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let total = self.total.load(Ordering::Relaxed);
        let successful = self.successful.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);
        let success_rate = if total > 0 {
            successful as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        StatsSnapshot {
            total,
            successful,
            failed,
            success_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ArticleRecord;

    #[test]
    fn test_empty_stats_have_zero_rate() {
        let snapshot = SessionStats::default().snapshot();
        assert_eq!(snapshot.total, 0);
        assert_eq!(snapshot.success_rate, 0.0);
    }

    #[test]
    fn test_record_splits_success_and_failure() {
        let stats = SessionStats::default();
        let good = ArticleRecord {
            title: "Foo".to_string(),
            ..Default::default()
        };
        stats.record(&Outcome::Extracted(good));
        stats.record(&Outcome::Empty(ArticleRecord::default()));
        stats.record(&Outcome::ValidationFailed("x".to_string()));
        stats.record(&Outcome::FetchFailed("y".to_string()));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total, 4);
        assert_eq!(snapshot.successful, 1);
        assert_eq!(snapshot.failed, 3);
        assert_eq!(snapshot.success_rate, 25.0);
    }
}
