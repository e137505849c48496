//! Read-only views over cache statistics
//!
//! A collector never touches the cache directly. It only sees values through
//! [`StatisticsSnapshot`], which both the live [`CacheMetrics`] counters and
//! the frozen [`MetricsSnapshot`] implement.
//!
//! [`CacheMetrics`]: crate::metrics::CacheMetrics

use serde::{Deserialize, Serialize};

/// Named numeric accessors exposed by a cache.
///
/// Implementations must be safe to read while the cache keeps mutating the
/// underlying counters. Every accessor is total.
pub trait StatisticsSnapshot: Send + Sync {
    /// Number of Get calls where a value was found.
    fn hits(&self) -> u64;

    /// Number of Get calls where no value was found.
    fn misses(&self) -> u64;

    /// Number of keys added to the cache.
    fn keys_added(&self) -> u64;

    /// Number of keys updated in place.
    fn keys_updated(&self) -> u64;

    /// Number of keys evicted from the cache.
    fn keys_evicted(&self) -> u64;

    /// Sum of the costs of all added keys.
    fn cost_added(&self) -> u64;

    /// Sum of the costs of all evicted keys.
    fn cost_evicted(&self) -> u64;

    /// Number of Set calls that never reached the internal buffers.
    fn sets_dropped(&self) -> u64;

    /// Number of Set calls rejected by the admission policy.
    fn sets_rejected(&self) -> u64;

    /// Number of Get counter increments that were dropped.
    fn gets_dropped(&self) -> u64;

    /// Number of Get counter increments that were kept.
    fn gets_kept(&self) -> u64;

    /// Fraction of Get calls that were hits, `0.0` before any lookup.
    fn ratio(&self) -> f64 {
        hit_ratio(self.hits(), self.misses())
    }
}

/// hits / (hits + misses), or `0.0` when there were no lookups.
pub fn hit_ratio(hits: u64, misses: u64) -> f64 {
    let total = hits.saturating_add(misses);
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// A point-in-time copy of every counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub keys_added: u64,
    pub keys_updated: u64,
    pub keys_evicted: u64,
    pub cost_added: u64,
    pub cost_evicted: u64,
    pub sets_dropped: u64,
    pub sets_rejected: u64,
    pub gets_dropped: u64,
    pub gets_kept: u64,
}

impl StatisticsSnapshot for MetricsSnapshot {
    fn hits(&self) -> u64 {
        self.hits
    }

    fn misses(&self) -> u64 {
        self.misses
    }

    fn keys_added(&self) -> u64 {
        self.keys_added
    }

    fn keys_updated(&self) -> u64 {
        self.keys_updated
    }

    fn keys_evicted(&self) -> u64 {
        self.keys_evicted
    }

    fn cost_added(&self) -> u64 {
        self.cost_added
    }

    fn cost_evicted(&self) -> u64 {
        self.cost_evicted
    }

    fn sets_dropped(&self) -> u64 {
        self.sets_dropped
    }

    fn sets_rejected(&self) -> u64 {
        self.sets_rejected
    }

    fn gets_dropped(&self) -> u64 {
        self.gets_dropped
    }

    fn gets_kept(&self) -> u64 {
        self.gets_kept
    }
}
