//! Prometheus collector for cache statistics
//!
//! [`Collector`] implements the registry's two-phase pull protocol.
//! `desc()` lists the descriptors resolved at construction and `collect()`
//! reads a fresh snapshot on every scrape. Nothing is cached between scrapes
//! and the collector holds no mutable state, so concurrent scrapes need no
//! locking.

use crate::desc::{MetricValueExtractor, ValueType};
use crate::errors::{Error, Result};
use crate::options::{CollectorOption, Config};
use prometheus::core::{Collector as RegistryCollector, Desc, Describer};
use prometheus::proto::{self, MetricFamily};
use prometheus::Opts;
use ristretto_prometheus_core::{
    CacheMetricsProvider, InstrumentedCache, MetricsProvider, StatisticsSnapshot,
};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

struct Metric {
    desc: Desc,
    value_type: ValueType,
    extractor: MetricValueExtractor,
}

/// One value read during a scrape
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub fq_name: String,
    pub help: String,
    pub value_type: ValueType,
    /// Constant labels, sorted by name
    pub const_labels: Vec<(String, String)>,
    pub value: f64,
}

/// Exports cache statistics to a Prometheus registry
pub struct Collector {
    provider: Arc<dyn MetricsProvider>,
    metrics: Vec<Metric>,
}

impl Collector {
    /// Resolve `options` into a collector reading from `provider`.
    ///
    /// Fails if two metrics qualify to the same name or if the registry
    /// rejects a descriptor. No partial collector is ever returned.
    pub fn new<P, I>(provider: P, options: I) -> Result<Self>
    where
        P: MetricsProvider + 'static,
        I: IntoIterator<Item = CollectorOption>,
    {
        let config = Config::from_options(options);
        let mut seen = HashSet::with_capacity(config.metrics.len());
        let mut metrics = Vec::with_capacity(config.metrics.len());

        for metric in config.metrics {
            let opts = Opts::new(metric.name, metric.help)
                .namespace(config.namespace.as_str())
                .subsystem(config.subsystem.as_str())
                .const_labels(config.const_labels.clone());
            let fq_name = opts.fq_name();

            if !seen.insert(fq_name.clone()) {
                warn!("Rejecting duplicate cache metric '{fq_name}'");
                return Err(Error::duplicate_metric_name(fq_name));
            }

            let desc = opts
                .describe()
                .map_err(|e| Error::invalid_descriptor(fq_name.as_str(), e))?;
            trace!("Resolved cache metric '{fq_name}'");

            metrics.push(Metric {
                desc,
                value_type: metric.value_type,
                extractor: metric.extractor,
            });
        }

        debug!(
            "Cache metrics collector created - namespace: '{}', subsystem: '{}', metrics: {}",
            config.namespace,
            config.subsystem,
            metrics.len()
        );

        Ok(Self {
            provider: Arc::new(provider),
            metrics,
        })
    }

    /// Build a collector over the metrics of `cache`
    pub fn for_cache<C, I>(cache: &C, options: I) -> Result<Self>
    where
        C: InstrumentedCache + ?Sized,
        I: IntoIterator<Item = CollectorOption>,
    {
        Self::new(CacheMetricsProvider::new(cache), options)
    }

    /// Number of resolved metrics
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Fully-qualified names in configuration order
    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.desc.fq_name.as_str()).collect()
    }

    /// Read the current values without going through a registry
    pub fn samples(&self) -> Vec<Sample> {
        self.scrape(|metric, value| Sample {
            fq_name: metric.desc.fq_name.clone(),
            help: metric.desc.help.clone(),
            value_type: metric.value_type,
            const_labels: metric
                .desc
                .const_label_pairs
                .iter()
                .map(|pair| (pair.get_name().to_string(), pair.get_value().to_string()))
                .collect(),
            value,
        })
    }

    /// Fetch the snapshot once and map every metric through `emit`
    fn scrape<T>(&self, emit: impl Fn(&Metric, f64) -> T) -> Vec<T> {
        let Some(snapshot) = self.provider.provide() else {
            trace!("No cache metrics available, skipping scrape");
            return Vec::new();
        };

        self.metrics
            .iter()
            .map(|metric| emit(metric, extract(metric, snapshot.as_ref())))
            .collect()
    }
}

fn extract(metric: &Metric, snapshot: &dyn StatisticsSnapshot) -> f64 {
    (metric.extractor)(snapshot)
}

fn metric_family(metric: &Metric, value: f64) -> MetricFamily {
    let mut sample = proto::Metric::default();
    sample.set_label(metric.desc.const_label_pairs.clone().into());
    match metric.value_type {
        ValueType::Counter => {
            let mut counter = proto::Counter::default();
            counter.set_value(value);
            sample.set_counter(counter);
        }
        ValueType::Gauge => {
            let mut gauge = proto::Gauge::default();
            gauge.set_value(value);
            sample.set_gauge(gauge);
        }
    }

    let mut family = MetricFamily::default();
    family.set_name(metric.desc.fq_name.clone());
    family.set_help(metric.desc.help.clone());
    family.set_field_type(metric.value_type.metric_type());
    family.set_metric(vec![sample].into());
    family
}

impl RegistryCollector for Collector {
    fn desc(&self) -> Vec<&Desc> {
        self.metrics.iter().map(|m| &m.desc).collect()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        self.scrape(metric_family)
    }
}

impl fmt::Debug for Collector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collector")
            .field("metrics", &self.metric_names())
            .finish_non_exhaustive()
    }
}
