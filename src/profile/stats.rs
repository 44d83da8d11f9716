//! Cache Statistics Module
//!
//! Tracks how often profiles are served from the store versus resynthesized.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache manager activity.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Reads served from a fresh record
    pub hits: u64,
    /// Reads for names with no stored record
    pub misses: u64,
    /// Reads that found a stale record and refetched it
    pub refreshes: u64,
    /// Successful store writes
    pub writes: u64,
    /// Partial updates applied
    pub updates: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses + refreshes), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses + self.refreshes;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_refresh(&mut self) {
        self.refreshes += 1;
    }

    pub fn record_write(&mut self) {
        self.writes += 1;
    }

    pub fn record_update(&mut self) {
        self.updates += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.refreshes, 0);
        assert_eq!(stats.writes, 0);
        assert_eq!(stats.updates, 0);
    }

    #[test]
    fn test_hit_rate_no_reads() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_counts_refreshes_as_non_hits() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.record_refresh();
        stats.record_hit();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_writes_and_updates_do_not_affect_hit_rate() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_write();
        stats.record_update();
        assert_eq!(stats.hit_rate(), 1.0);
        assert_eq!(stats.writes, 1);
        assert_eq!(stats.updates, 1);
    }
}
