//! Errors raised while building a collector

/// Result type alias for collector construction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors detected when resolving metric descriptors.
///
/// Every variant is a construction-time failure. Scrapes never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two configured metrics qualify to the same name
    #[error("duplicate metric name '{fq_name}'")]
    DuplicateMetricName { fq_name: String },

    /// The registry refused the descriptor (bad name, help or label)
    #[error("invalid metric descriptor '{fq_name}': {source}")]
    InvalidDescriptor {
        fq_name: String,
        #[source]
        source: prometheus::Error,
    },
}

impl Error {
    /// Create a duplicate metric name error
    #[must_use]
    pub fn duplicate_metric_name(fq_name: impl Into<String>) -> Self {
        Error::DuplicateMetricName {
            fq_name: fq_name.into(),
        }
    }

    /// Create an invalid descriptor error with the registry's reason
    #[must_use]
    pub fn invalid_descriptor(fq_name: impl Into<String>, source: prometheus::Error) -> Self {
        Error::InvalidDescriptor {
            fq_name: fq_name.into(),
            source,
        }
    }

    /// The fully-qualified name the error refers to
    pub fn fq_name(&self) -> &str {
        match self {
            Error::DuplicateMetricName { fq_name } | Error::InvalidDescriptor { fq_name, .. } => {
                fq_name
            }
        }
    }

    /// Whether this is a name collision between two configured metrics
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateMetricName { .. })
    }
}
