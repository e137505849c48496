//! Prometheus exporter for ristretto-style cache statistics.
//!
//! The crate republishes counters a cache already maintains (hits, misses,
//! keys and costs added or evicted, dropped and rejected operations) as
//! Prometheus metrics. It computes nothing itself: every scrape reads the
//! cache's current [`StatisticsSnapshot`] and reports the values as they are.
//!
//! ```no_run
//! use prometheus::Registry;
//! use ristretto_prometheus::{CacheMetrics, CacheMetricsProvider, CollectorBuilder};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = Arc::new(CacheMetrics::new());
//! let collector = CollectorBuilder::new()
//!     .namespace("appname")
//!     .const_labels([("app_version", "v1.2.3")])
//!     .hits_counter()
//!     .misses_counter()
//!     .hits_ratio_gauge()
//!     .build(CacheMetricsProvider::from_metrics(metrics))?;
//!
//! let registry = Registry::new();
//! registry.register(Box::new(collector))?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod collector;
pub mod desc;
pub mod errors;
pub mod options;
pub mod presets;
pub mod settings;

pub use builder::CollectorBuilder;
pub use collector::{Collector, Sample};
pub use desc::{build_fq_name, MetricDesc, MetricValueExtractor, ValueType};
pub use errors::{Error, Result};
pub use options::{CollectorOption, Config};
pub use presets::Preset;
pub use settings::CollectorSettings;

pub use ristretto_prometheus_core::{
    hit_ratio, CacheMetrics, CacheMetricsProvider, InstrumentedCache, MetricsProvider,
    MetricsSnapshot, NoMetrics, StatisticsSnapshot,
};
