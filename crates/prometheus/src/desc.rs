//! Metric descriptors
//!
//! A [`MetricDesc`] pairs an unqualified metric name and help text with the
//! function that reads its value out of a statistics snapshot.

use prometheus::proto::MetricType;
use prometheus::Opts;
use ristretto_prometheus_core::StatisticsSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Projection from a snapshot to the value of one metric
pub type MetricValueExtractor = Arc<dyn Fn(&dyn StatisticsSnapshot) -> f64 + Send + Sync>;

/// How the registry should interpret a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Counter,
    Gauge,
}

impl ValueType {
    /// The matching exposition type
    pub fn metric_type(self) -> MetricType {
        match self {
            ValueType::Counter => MetricType::COUNTER,
            ValueType::Gauge => MetricType::GAUGE,
        }
    }
}

/// One metric to export: name, help, value type and extractor
#[derive(Clone)]
pub struct MetricDesc {
    /// Name before namespace and subsystem are applied
    pub name: String,
    pub help: String,
    pub value_type: ValueType,
    pub extractor: MetricValueExtractor,
}

impl MetricDesc {
    pub fn new<F>(
        name: impl Into<String>,
        help: impl Into<String>,
        value_type: ValueType,
        extractor: F,
    ) -> Self
    where
        F: Fn(&dyn StatisticsSnapshot) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            help: help.into(),
            value_type,
            extractor: Arc::new(extractor),
        }
    }

    /// Shorthand for a counter descriptor
    pub fn counter<F>(name: impl Into<String>, help: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&dyn StatisticsSnapshot) -> f64 + Send + Sync + 'static,
    {
        Self::new(name, help, ValueType::Counter, extractor)
    }

    /// Shorthand for a gauge descriptor
    pub fn gauge<F>(name: impl Into<String>, help: impl Into<String>, extractor: F) -> Self
    where
        F: Fn(&dyn StatisticsSnapshot) -> f64 + Send + Sync + 'static,
    {
        Self::new(name, help, ValueType::Gauge, extractor)
    }

    /// Read this metric's value from `snapshot`
    pub fn extract(&self, snapshot: &dyn StatisticsSnapshot) -> f64 {
        (self.extractor)(snapshot)
    }
}

impl fmt::Debug for MetricDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricDesc")
            .field("name", &self.name)
            .field("help", &self.help)
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}

/// Join namespace, subsystem and name the way the registry does.
///
/// Empty segments are skipped. An empty `name` yields an empty string.
pub fn build_fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    Opts::new(name, "")
        .namespace(namespace)
        .subsystem(subsystem)
        .fq_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ristretto_prometheus_core::MetricsSnapshot;
    use rstest::rstest;

    #[rstest]
    #[case("appname", "subsystemname", "ristretto_hits_total", "appname_subsystemname_ristretto_hits_total")]
    #[case("appname", "", "ristretto_hits_total", "appname_ristretto_hits_total")]
    #[case("", "subsystemname", "ristretto_hits_total", "subsystemname_ristretto_hits_total")]
    #[case("", "", "ristretto_hits_total", "ristretto_hits_total")]
    #[case("appname", "subsystemname", "", "")]
    fn test_build_fq_name(
        #[case] namespace: &str,
        #[case] subsystem: &str,
        #[case] name: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(build_fq_name(namespace, subsystem, name), expected);
    }

    #[test]
    fn test_extract_runs_projection() {
        let desc = MetricDesc::counter("hits", "hits", |s| s.hits() as f64 * 2.0);
        let snapshot = MetricsSnapshot {
            hits: 21,
            ..Default::default()
        };
        assert_eq!(desc.extract(&snapshot), 42.0);
    }

    #[test]
    fn test_value_type_maps_to_metric_type() {
        assert_eq!(ValueType::Counter.metric_type(), MetricType::COUNTER);
        assert_eq!(ValueType::Gauge.metric_type(), MetricType::GAUGE);
    }

    #[test]
    fn test_debug_omits_extractor() {
        let desc = MetricDesc::gauge("ratio", "hit ratio", |s| s.ratio());
        let debug = format!("{desc:?}");
        assert!(debug.contains("\"ratio\""));
        assert!(debug.contains("Gauge"));
    }
}
