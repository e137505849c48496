//! Common test utilities and helpers
//!
//! Provides a small in-memory cache that keeps ristretto-style counters, so
//! integration tests can drive real traffic through a collector.

#![allow(dead_code)]

use parking_lot::RwLock;
use ristretto_prometheus::{CacheMetrics, InstrumentedCache};
use std::collections::HashMap;
use std::sync::{Arc, Once};

static TRACING: Once = Once::new();

/// Install a test subscriber honoring `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Minimal string cache recording hits, misses, additions and updates
pub struct TestCache {
    entries: RwLock<HashMap<String, String>>,
    metrics: Option<Arc<CacheMetrics>>,
}

impl TestCache {
    /// Create a cache with metrics enabled
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            metrics: Some(Arc::new(CacheMetrics::new())),
        }
    }

    /// Create a cache running with metrics disabled
    pub fn without_metrics() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            metrics: None,
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>, cost: u64) {
        let previous = self.entries.write().insert(key.into(), value.into());
        if let Some(metrics) = &self.metrics {
            match previous {
                Some(_) => metrics.record_key_updated(),
                None => metrics.record_key_added(cost),
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = self.entries.read().get(key).cloned();
        if let Some(metrics) = &self.metrics {
            if value.is_some() {
                metrics.record_hit();
            } else {
                metrics.record_miss();
            }
        }
        value
    }
}

impl InstrumentedCache for TestCache {
    fn metrics(&self) -> Option<Arc<CacheMetrics>> {
        self.metrics.clone()
    }
}

/// Fill `cache` with 123 keys, then issue 49 hits and 20 misses
pub fn generate_traffic(cache: &TestCache) {
    for i in 0..123 {
        cache.set(format!("key{i}"), format!("val{i}"), 1);
    }

    for i in 50..99 {
        let key = format!("key{i}");
        assert!(cache.get(&key).is_some(), "expected key: {key}");
    }

    for i in 150..170 {
        let key = format!("key{i}");
        assert!(cache.get(&key).is_none(), "unexpected key: {key}");
    }
}
