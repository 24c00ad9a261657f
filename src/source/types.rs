use std::collections::BTreeMap;

use crate::error::SourceError;

pub const FAMILY_CPU_SECONDS: &str = "node_cpu_seconds_total";
pub const FAMILY_MEMORY_ACTIVE_BYTES: &str = "node_memory_active_bytes";
pub const FAMILY_NETWORK_RECEIVE_BYTES: &str = "node_network_receive_bytes_total";
pub const FAMILY_NETWORK_TRANSMIT_BYTES: &str = "node_network_transmit_bytes_total";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointValue {
    Counter(f64),
    Gauge(f64),
}

impl PointValue {
    #[must_use]
    pub const fn get(self) -> f64 {
        match self {
            PointValue::Counter(value) | PointValue::Gauge(value) => value,
        }
    }
}

/// One raw measurement with its classification labels (`mode`, `device`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint {
    pub labels: BTreeMap<String, String>,
    pub value: PointValue,
}

impl LabeledPoint {
    #[must_use]
    pub const fn counter(value: f64) -> Self {
        Self {
            labels: BTreeMap::new(),
            value: PointValue::Counter(value),
        }
    }

    #[must_use]
    pub const fn gauge(value: f64) -> Self {
        Self {
            labels: BTreeMap::new(),
            value: PointValue::Gauge(value),
        }
    }

    #[must_use]
    pub fn with_label(mut self, key: &str, value: &str) -> Self {
        self.labels.insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricFamily {
    pub name: String,
    pub points: Vec<LabeledPoint>,
}

impl MetricFamily {
    #[must_use]
    pub fn new(name: &str, points: Vec<LabeledPoint>) -> Self {
        Self {
            name: name.to_owned(),
            points,
        }
    }
}

/// Produces one snapshot of every family it knows about per call.
///
/// Sources are constructed by the caller and moved into the sampler; nothing
/// is registered process-wide.
pub trait MetricSource: Send + 'static {
    /// Gather a fresh snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying counters cannot be read. The
    /// sampler treats this as fatal for the session.
    fn gather(&mut self) -> Result<Vec<MetricFamily>, SourceError>;
}

impl<T> MetricSource for Box<T>
where
    T: MetricSource + ?Sized,
{
    fn gather(&mut self) -> Result<Vec<MetricFamily>, SourceError> {
        (**self).gather()
    }
}
