//! Built-in descriptors for every ristretto counter

use crate::desc::{MetricDesc, ValueType};
use ristretto_prometheus_core::StatisticsSnapshot;
use serde::{Deserialize, Serialize};

/// A built-in metric with a fixed name, help text and extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    HitsCounter,
    MissesCounter,
    HitsRatioGauge,
    KeysAdded,
    KeysUpdated,
    KeysEvicted,
    CostAdded,
    CostEvicted,
    SetsDropped,
    SetsRejected,
    GetsDropped,
    GetsKept,
}

impl Preset {
    pub const ALL: [Preset; 12] = [
        Preset::HitsCounter,
        Preset::MissesCounter,
        Preset::HitsRatioGauge,
        Preset::KeysAdded,
        Preset::KeysUpdated,
        Preset::KeysEvicted,
        Preset::CostAdded,
        Preset::CostEvicted,
        Preset::SetsDropped,
        Preset::SetsRejected,
        Preset::GetsDropped,
        Preset::GetsKept,
    ];

    /// Metric name before namespace and subsystem are applied
    pub fn name(self) -> &'static str {
        match self {
            Preset::HitsCounter => "ristretto_hits_total",
            Preset::MissesCounter => "ristretto_misses_total",
            Preset::HitsRatioGauge => "ristretto_hits_ratio",
            Preset::KeysAdded => "ristretto_keys_added_total",
            Preset::KeysUpdated => "ristretto_keys_updated_total",
            Preset::KeysEvicted => "ristretto_keys_evicted_total",
            Preset::CostAdded => "ristretto_cost_added_total",
            Preset::CostEvicted => "ristretto_cost_evicted_total",
            Preset::SetsDropped => "ristretto_sets_dropped_total",
            Preset::SetsRejected => "ristretto_sets_rejected_total",
            Preset::GetsDropped => "ristretto_gets_dropped_total",
            Preset::GetsKept => "ristretto_gets_kept_total",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Preset::HitsCounter => {
                "The number of Get calls where a value was found for the corresponding key."
            }
            Preset::MissesCounter => {
                "The number of Get calls where a value was not found for the corresponding key."
            }
            Preset::HitsRatioGauge => "The percentage of successful Get calls (hits).",
            Preset::KeysAdded => "The number of added keys in the cache.",
            Preset::KeysUpdated => "The number of updated keys in the cache.",
            Preset::KeysEvicted => "The number of evicted keys from the cache.",
            Preset::CostAdded => "The sum of costs that have been added.",
            Preset::CostEvicted => "The sum of all costs that have been evicted.",
            Preset::SetsDropped => "The number of Set calls that don't make it into internal buffers.",
            Preset::SetsRejected => "The number of Set calls rejected by the policy.",
            Preset::GetsDropped => "The number of Get counter increments that are dropped.",
            Preset::GetsKept => "The number of Get counter increments that are kept.",
        }
    }

    pub fn value_type(self) -> ValueType {
        match self {
            Preset::HitsRatioGauge => ValueType::Gauge,
            _ => ValueType::Counter,
        }
    }

    /// Read this preset's value from `snapshot`
    pub fn extract(self, snapshot: &dyn StatisticsSnapshot) -> f64 {
        match self {
            Preset::HitsCounter => snapshot.hits() as f64,
            Preset::MissesCounter => snapshot.misses() as f64,
            Preset::HitsRatioGauge => snapshot.ratio(),
            Preset::KeysAdded => snapshot.keys_added() as f64,
            Preset::KeysUpdated => snapshot.keys_updated() as f64,
            Preset::KeysEvicted => snapshot.keys_evicted() as f64,
            Preset::CostAdded => snapshot.cost_added() as f64,
            Preset::CostEvicted => snapshot.cost_evicted() as f64,
            Preset::SetsDropped => snapshot.sets_dropped() as f64,
            Preset::SetsRejected => snapshot.sets_rejected() as f64,
            Preset::GetsDropped => snapshot.gets_dropped() as f64,
            Preset::GetsKept => snapshot.gets_kept() as f64,
        }
    }

    /// The full descriptor appended by this preset
    pub fn desc(self) -> MetricDesc {
        MetricDesc::new(self.name(), self.help(), self.value_type(), move |snapshot| {
            self.extract(snapshot)
        })
    }
}
