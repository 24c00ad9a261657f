use tracing::debug;

use crate::source::LabeledPoint;

use super::names::MetricName;
use super::state::Session;

pub const BYTES_PER_MIB: f64 = 1_048_576.0;

pub const DEFAULT_CPU_EXCLUDED_MODES: [&str; 2] = ["idle", "steal"];
pub const DEFAULT_LOOPBACK_DEVICES: [&str; 2] = ["lo", "lo0"];

/// Drops points whose `label` carries one of `values`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelExclusion {
    pub label: String,
    pub values: Vec<String>,
}

impl LabelExclusion {
    #[must_use]
    pub fn new<I, V>(label: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Self {
            label: label.to_owned(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn excludes(&self, point: &LabeledPoint) -> bool {
        point
            .label(&self.label)
            .is_some_and(|value| self.values.iter().any(|excluded| excluded == value))
    }
}

/// Sum of every point the exclusion lets through.
#[must_use]
pub fn cumulative_total(points: &[LabeledPoint], exclusion: &LabelExclusion) -> f64 {
    points
        .iter()
        .filter(|point| !exclusion.excludes(point))
        .map(|point| point.value.get())
        .sum()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Derivation {
    /// Monotonic counter reported as the difference between ticks.
    Counter { exclusion: LabelExclusion },
    /// Instantaneous reading; the series stores `value / divisor` while the
    /// live sink receives the raw value.
    Gauge { divisor: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub metric: MetricName,
    pub derivation: Derivation,
}

impl Rule {
    /// Fold one family's points into the session.
    ///
    /// Returns the value to forward to the live sink, if any. Counters stay
    /// silent until a non-zero baseline exists.
    pub fn apply(&self, points: &[LabeledPoint], session: &mut Session) -> Option<f64> {
        match &self.derivation {
            Derivation::Counter { exclusion } => {
                let total = cumulative_total(points, exclusion);
                let delta = match session.previous(self.metric) {
                    Some(previous) if previous > 0.0 => {
                        let delta = total - previous;
                        if delta < 0.0 {
                            debug!(metric = %self.metric, previous, total, "Counter went backwards");
                        }
                        session.record(self.metric, delta);
                        Some(delta)
                    }
                    Some(_) | None => None,
                };
                session.update_cumulative(self.metric, total);
                delta
            }
            Derivation::Gauge { divisor } => {
                let raw = points.first()?.value.get();
                session.record(self.metric, raw / divisor);
                Some(raw)
            }
        }
    }
}

/// One rule per tracked metric, looked up by raw family name.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(DEFAULT_CPU_EXCLUDED_MODES, DEFAULT_LOOPBACK_DEVICES)
    }
}

impl RuleSet {
    #[must_use]
    pub fn new<M, D>(cpu_excluded_modes: M, loopback_devices: D) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let loopback = LabelExclusion::new("device", loopback_devices);
        Self {
            rules: vec![
                Rule {
                    metric: MetricName::CpuSeconds,
                    derivation: Derivation::Counter {
                        exclusion: LabelExclusion::new("mode", cpu_excluded_modes),
                    },
                },
                Rule {
                    metric: MetricName::ActiveMemoryMibs,
                    derivation: Derivation::Gauge {
                        divisor: BYTES_PER_MIB,
                    },
                },
                Rule {
                    metric: MetricName::ReceiveBytes,
                    derivation: Derivation::Counter {
                        exclusion: loopback.clone(),
                    },
                },
                Rule {
                    metric: MetricName::TransmitBytes,
                    derivation: Derivation::Counter {
                        exclusion: loopback,
                    },
                },
            ],
        }
    }

    #[must_use]
    pub fn rule_for(&self, family: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.metric.family() == family)
    }

    #[must_use]
    pub fn rule(&self, metric: MetricName) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.metric == metric)
    }
}
