//! Live cache counters
//!
//! `CacheMetrics` is what a cache embeds and updates on every operation. All
//! counters are independent relaxed atomics: a reader may observe hits from
//! one instant and misses from the next, which exporters accept.

use crate::snapshot::{MetricsSnapshot, StatisticsSnapshot};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters describing cache behavior
#[derive(Debug, Default)]
pub struct CacheMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    keys_added: AtomicU64,
    keys_updated: AtomicU64,
    keys_evicted: AtomicU64,
    cost_added: AtomicU64,
    cost_evicted: AtomicU64,
    sets_dropped: AtomicU64,
    sets_rejected: AtomicU64,
    gets_dropped: AtomicU64,
    gets_kept: AtomicU64,
}

impl CacheMetrics {
    /// Create a new metrics instance with every counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a Get call that found a value
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a Get call that found nothing
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a new key together with its cost
    pub fn record_key_added(&self, cost: u64) {
        self.keys_added.fetch_add(1, Ordering::Relaxed);
        self.cost_added.fetch_add(cost, Ordering::Relaxed);
    }

    /// Record an in-place update of an existing key
    pub fn record_key_updated(&self) {
        self.keys_updated.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an eviction together with the evicted cost
    pub fn record_key_evicted(&self, cost: u64) {
        self.keys_evicted.fetch_add(1, Ordering::Relaxed);
        self.cost_evicted.fetch_add(cost, Ordering::Relaxed);
    }

    /// Record a Set call dropped before reaching the buffers
    pub fn record_set_dropped(&self) {
        self.sets_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a Set call rejected by the policy
    pub fn record_set_rejected(&self) {
        self.sets_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a batch of Get counter increments that were dropped
    pub fn record_gets_dropped(&self, count: u64) {
        self.gets_dropped.fetch_add(count, Ordering::Relaxed);
    }

    /// Record a batch of Get counter increments that were kept
    pub fn record_gets_kept(&self, count: u64) {
        self.gets_kept.fetch_add(count, Ordering::Relaxed);
    }

    /// Reset every counter to zero
    pub fn clear(&self) {
        for counter in [
            &self.hits,
            &self.misses,
            &self.keys_added,
            &self.keys_updated,
            &self.keys_evicted,
            &self.cost_added,
            &self.cost_evicted,
            &self.sets_dropped,
            &self.sets_rejected,
            &self.gets_dropped,
            &self.gets_kept,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
        tracing::debug!("Cache metrics cleared");
    }

    /// Take a snapshot of current metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            hits: self.hits(),
            misses: self.misses(),
            keys_added: self.keys_added(),
            keys_updated: self.keys_updated(),
            keys_evicted: self.keys_evicted(),
            cost_added: self.cost_added(),
            cost_evicted: self.cost_evicted(),
            sets_dropped: self.sets_dropped(),
            sets_rejected: self.sets_rejected(),
            gets_dropped: self.gets_dropped(),
            gets_kept: self.gets_kept(),
        }
    }
}

impl StatisticsSnapshot for CacheMetrics {
    fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    fn keys_added(&self) -> u64 {
        self.keys_added.load(Ordering::Relaxed)
    }

    fn keys_updated(&self) -> u64 {
        self.keys_updated.load(Ordering::Relaxed)
    }

    fn keys_evicted(&self) -> u64 {
        self.keys_evicted.load(Ordering::Relaxed)
    }

    fn cost_added(&self) -> u64 {
        self.cost_added.load(Ordering::Relaxed)
    }

    fn cost_evicted(&self) -> u64 {
        self.cost_evicted.load(Ordering::Relaxed)
    }

    fn sets_dropped(&self) -> u64 {
        self.sets_dropped.load(Ordering::Relaxed)
    }

    fn sets_rejected(&self) -> u64 {
        self.sets_rejected.load(Ordering::Relaxed)
    }

    fn gets_dropped(&self) -> u64 {
        self.gets_dropped.load(Ordering::Relaxed)
    }

    fn gets_kept(&self) -> u64 {
        self.gets_kept.load(Ordering::Relaxed)
    }
}

impl fmt::Display for CacheMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hit: {} miss: {} keys-added: {} keys-updated: {} keys-evicted: {} \
             cost-added: {} cost-evicted: {} sets-dropped: {} sets-rejected: {} \
             gets-dropped: {} gets-kept: {} gets-total: {} hit-ratio: {:.2}",
            self.hits(),
            self.misses(),
            self.keys_added(),
            self.keys_updated(),
            self.keys_evicted(),
            self.cost_added(),
            self.cost_evicted(),
            self.sets_dropped(),
            self.sets_rejected(),
            self.gets_dropped(),
            self.gets_kept(),
            self.hits().saturating_add(self.misses()),
            self.ratio(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_new_metrics_are_zero() {
        let metrics = CacheMetrics::new();
        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
        assert_eq!(metrics.ratio(), 0.0);
    }

    #[test]
    fn test_key_added_tracks_cost() {
        let metrics = CacheMetrics::new();
        metrics.record_key_added(3);
        metrics.record_key_added(5);
        metrics.record_key_evicted(3);

        assert_eq!(metrics.keys_added(), 2);
        assert_eq!(metrics.cost_added(), 8);
        assert_eq!(metrics.keys_evicted(), 1);
        assert_eq!(metrics.cost_evicted(), 3);
    }

    #[test]
    fn test_clear_resets_counters() {
        let metrics = CacheMetrics::new();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_set_rejected();
        metrics.record_gets_kept(10);

        metrics.clear();

        assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_display_summary() {
        let metrics = CacheMetrics::new();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();

        let summary = metrics.to_string();
        assert!(summary.starts_with("hit: 3 miss: 1 "));
        assert!(summary.contains("gets-total: 4"));
        assert!(summary.ends_with("hit-ratio: 0.75"));
    }

    #[test]
    fn test_display_total_saturates() {
        let metrics = CacheMetrics::new();
        metrics.hits.store(u64::MAX, Ordering::Relaxed);
        metrics.record_miss();

        let summary = metrics.to_string();
        assert!(summary.contains(&format!("gets-total: {}", u64::MAX)));
    }

    #[test]
    fn test_concurrent_recording() {
        let metrics = Arc::new(CacheMetrics::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        metrics.record_hit();
                        metrics.record_key_added(2);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.hits(), 8000);
        assert_eq!(metrics.keys_added(), 8000);
        assert_eq!(metrics.cost_added(), 16000);
    }

    proptest! {
        #[test]
        fn proptest_snapshot_matches_live_counters(
            hits in 0u64..200,
            misses in 0u64..200,
            sets_dropped in 0u64..50
        ) {
            let metrics = CacheMetrics::new();
            for _ in 0..hits {
                metrics.record_hit();
            }
            for _ in 0..misses {
                metrics.record_miss();
            }
            for _ in 0..sets_dropped {
                metrics.record_set_dropped();
            }

            let snapshot = metrics.snapshot();
            prop_assert_eq!(snapshot.hits, hits);
            prop_assert_eq!(snapshot.misses, misses);
            prop_assert_eq!(snapshot.sets_dropped, sets_dropped);
            prop_assert_eq!(snapshot.ratio(), metrics.ratio());
        }
    }
}
