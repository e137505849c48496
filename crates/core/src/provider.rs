//! Snapshot accessors used at scrape time
//!
//! A collector keeps a [`MetricsProvider`] and asks it for a snapshot on every
//! scrape. Returning `None` means the cache has metrics disabled; the
//! collector then reports nothing for that scrape.

use crate::metrics::CacheMetrics;
use crate::snapshot::StatisticsSnapshot;
use std::sync::Arc;

/// Source of the current statistics snapshot
pub trait MetricsProvider: Send + Sync {
    /// Return the snapshot to read during this scrape, if any.
    fn provide(&self) -> Option<Arc<dyn StatisticsSnapshot>>;
}

impl<F, S> MetricsProvider for F
where
    F: Fn() -> Option<Arc<S>> + Send + Sync,
    S: StatisticsSnapshot + 'static,
{
    fn provide(&self) -> Option<Arc<dyn StatisticsSnapshot>> {
        self().map(|snapshot| snapshot as Arc<dyn StatisticsSnapshot>)
    }
}

/// A cache that may expose ristretto-style [`CacheMetrics`]
pub trait InstrumentedCache {
    /// The cache's live counters, or `None` when metrics are disabled.
    fn metrics(&self) -> Option<Arc<CacheMetrics>>;
}

/// Provider backed by a cache's [`CacheMetrics`] handle
#[derive(Debug, Clone)]
pub struct CacheMetricsProvider {
    metrics: Option<Arc<CacheMetrics>>,
}

impl CacheMetricsProvider {
    /// Capture the metrics handle of `cache`.
    ///
    /// The handle is shared with the cache, so later scrapes observe the
    /// counters as the cache keeps updating them.
    pub fn new<C: InstrumentedCache + ?Sized>(cache: &C) -> Self {
        Self {
            metrics: cache.metrics(),
        }
    }

    /// Wrap an existing metrics handle directly.
    pub fn from_metrics(metrics: Arc<CacheMetrics>) -> Self {
        Self {
            metrics: Some(metrics),
        }
    }
}

impl MetricsProvider for CacheMetricsProvider {
    fn provide(&self) -> Option<Arc<dyn StatisticsSnapshot>> {
        self.metrics
            .as_ref()
            .map(|metrics| Arc::clone(metrics) as Arc<dyn StatisticsSnapshot>)
    }
}

/// Provider for caches running without metrics
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMetrics;

impl MetricsProvider for NoMetrics {
    fn provide(&self) -> Option<Arc<dyn StatisticsSnapshot>> {
        None
    }
}
