//! Collector configuration
//!
//! A [`Config`] is assembled by applying an ordered list of
//! [`CollectorOption`]s to `Config::default()`. Scalar options overwrite
//! whatever came before; metric options accumulate in order. Applying options
//! never fails: name collisions are only detected when the collector is built.

use crate::desc::MetricDesc;
use crate::presets::Preset;
use std::collections::HashMap;

/// One configuration effect
#[derive(Debug, Clone)]
pub enum CollectorOption {
    Namespace(String),
    Subsystem(String),
    ConstLabels(HashMap<String, String>),
    Metric(MetricDesc),
}

impl CollectorOption {
    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        CollectorOption::Namespace(namespace.into())
    }

    pub fn with_subsystem(subsystem: impl Into<String>) -> Self {
        CollectorOption::Subsystem(subsystem.into())
    }

    /// Labels attached to every exported sample
    pub fn with_const_labels<I, K, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        CollectorOption::ConstLabels(
            labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn with_metric(desc: MetricDesc) -> Self {
        CollectorOption::Metric(desc)
    }

    pub fn with_preset(preset: Preset) -> Self {
        CollectorOption::Metric(preset.desc())
    }

    pub fn hits_counter() -> Self {
        Self::with_preset(Preset::HitsCounter)
    }

    pub fn misses_counter() -> Self {
        Self::with_preset(Preset::MissesCounter)
    }

    pub fn hits_ratio_gauge() -> Self {
        Self::with_preset(Preset::HitsRatioGauge)
    }

    pub fn keys_added() -> Self {
        Self::with_preset(Preset::KeysAdded)
    }

    pub fn keys_updated() -> Self {
        Self::with_preset(Preset::KeysUpdated)
    }

    pub fn keys_evicted() -> Self {
        Self::with_preset(Preset::KeysEvicted)
    }

    pub fn cost_added() -> Self {
        Self::with_preset(Preset::CostAdded)
    }

    pub fn cost_evicted() -> Self {
        Self::with_preset(Preset::CostEvicted)
    }

    pub fn sets_dropped() -> Self {
        Self::with_preset(Preset::SetsDropped)
    }

    pub fn sets_rejected() -> Self {
        Self::with_preset(Preset::SetsRejected)
    }

    pub fn gets_dropped() -> Self {
        Self::with_preset(Preset::GetsDropped)
    }

    pub fn gets_kept() -> Self {
        Self::with_preset(Preset::GetsKept)
    }

    /// Every preset, in declaration order
    pub fn all_presets() -> Vec<Self> {
        Preset::ALL.into_iter().map(Self::with_preset).collect()
    }
}

/// Resolved collector configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub namespace: String,
    pub subsystem: String,
    pub const_labels: HashMap<String, String>,
    pub metrics: Vec<MetricDesc>,
}

impl Config {
    /// Build a configuration from scratch
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = CollectorOption>,
    {
        let mut config = Self::default();
        config.apply(options);
        config
    }

    /// Apply `options` in order
    pub fn apply<I>(&mut self, options: I)
    where
        I: IntoIterator<Item = CollectorOption>,
    {
        for option in options {
            match option {
                CollectorOption::Namespace(namespace) => self.namespace = namespace,
                CollectorOption::Subsystem(subsystem) => self.subsystem = subsystem,
                CollectorOption::ConstLabels(labels) => self.const_labels = labels,
                CollectorOption::Metric(desc) => self.metrics.push(desc),
            }
        }
    }
}
