//! Declarative collector settings
//!
//! Host applications usually keep exporter configuration next to the rest of
//! their config. `CollectorSettings` deserializes from any serde format and
//! expands into the equivalent list of [`CollectorOption`]s.

use crate::options::CollectorOption;
use crate::presets::Preset;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable description of which cache metrics to export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorSettings {
    /// Namespace prefix for every metric, left untouched when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Subsystem prefix for every metric, left untouched when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsystem: Option<String>,
    /// Labels attached to every sample
    pub const_labels: HashMap<String, String>,
    /// Built-in metrics to export, in order
    pub presets: Vec<Preset>,
}

impl CollectorSettings {
    /// Expand into options, scalar settings first.
    ///
    /// Only settings that are present produce an option, so the expansion can
    /// be layered on top of earlier options without resetting them.
    pub fn into_options(self) -> Vec<CollectorOption> {
        let mut options = Vec::with_capacity(self.presets.len() + 3);
        if let Some(namespace) = self.namespace {
            options.push(CollectorOption::Namespace(namespace));
        }
        if let Some(subsystem) = self.subsystem {
            options.push(CollectorOption::Subsystem(subsystem));
        }
        if !self.const_labels.is_empty() {
            options.push(CollectorOption::ConstLabels(self.const_labels));
        }
        options.extend(self.presets.into_iter().map(CollectorOption::with_preset));
        options
    }
}
