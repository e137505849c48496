//! Chained construction of a [`Collector`]

use crate::collector::Collector;
use crate::desc::MetricDesc;
use crate::errors::Result;
use crate::options::CollectorOption;
use crate::presets::Preset;
use ristretto_prometheus_core::{InstrumentedCache, MetricsProvider};

/// Builder for [`Collector`]
///
/// Every method records one [`CollectorOption`]; `build` applies them in the
/// order they were given.
#[derive(Debug, Clone, Default)]
pub struct CollectorBuilder {
    options: Vec<CollectorOption>,
}

impl CollectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn namespace(self, namespace: impl Into<String>) -> Self {
        self.option(CollectorOption::with_namespace(namespace))
    }

    pub fn subsystem(self, subsystem: impl Into<String>) -> Self {
        self.option(CollectorOption::with_subsystem(subsystem))
    }

    pub fn const_labels<I, K, V>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.option(CollectorOption::with_const_labels(labels))
    }

    pub fn metric(self, desc: MetricDesc) -> Self {
        self.option(CollectorOption::with_metric(desc))
    }

    pub fn preset(self, preset: Preset) -> Self {
        self.option(CollectorOption::with_preset(preset))
    }

    pub fn hits_counter(self) -> Self {
        self.preset(Preset::HitsCounter)
    }

    pub fn misses_counter(self) -> Self {
        self.preset(Preset::MissesCounter)
    }

    pub fn hits_ratio_gauge(self) -> Self {
        self.preset(Preset::HitsRatioGauge)
    }

    /// Add every built-in metric
    pub fn all_presets(self) -> Self {
        self.options(CollectorOption::all_presets())
    }

    pub fn option(mut self, option: CollectorOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = CollectorOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Build the collector reading from `provider`
    pub fn build<P: MetricsProvider + 'static>(self, provider: P) -> Result<Collector> {
        Collector::new(provider, self.options)
    }

    /// Build the collector reading from the metrics of `cache`
    pub fn build_for_cache<C: InstrumentedCache + ?Sized>(self, cache: &C) -> Result<Collector> {
        Collector::for_cache(cache, self.options)
    }
}
