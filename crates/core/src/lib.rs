//! Core cache statistics types for `ristretto-prometheus`.
//!
//! This crate defines what an exporter is allowed to see of a cache: a
//! read-only set of counters and the accessor used to fetch them at scrape
//! time.
//!
//! ## Key Components
//!
//! - **`snapshot`**: The `StatisticsSnapshot` accessor contract and the plain
//!   `MetricsSnapshot` value type.
//! - **`metrics`**: `CacheMetrics`, lock-free counters a cache updates on its
//!   hot path.
//! - **`provider`**: `MetricsProvider` and the adapters that hand a snapshot to
//!   a collector on every scrape.

pub mod metrics;
pub mod provider;
pub mod snapshot;

pub use self::{
    metrics::CacheMetrics,
    provider::{CacheMetricsProvider, InstrumentedCache, MetricsProvider, NoMetrics},
    snapshot::{hit_ratio, MetricsSnapshot, StatisticsSnapshot},
};
