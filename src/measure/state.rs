use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::names::MetricName;

/// Everything one sampling session accumulates: counter baselines and the
/// recorded series.
///
/// Only the sampler task mutates a session; it is handed back by value once
/// the task has exited.
#[derive(Debug, Clone)]
pub struct Session {
    started_at: DateTime<Utc>,
    ticks: u64,
    cumulative: HashMap<MetricName, f64>,
    series: HashMap<MetricName, Vec<f64>>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            ticks: 0,
            cumulative: HashMap::new(),
            series: HashMap::new(),
        }
    }

    pub fn record(&mut self, name: MetricName, value: f64) {
        self.series.entry(name).or_default().push(value);
    }

    pub fn update_cumulative(&mut self, name: MetricName, value: f64) {
        self.cumulative.insert(name, value);
    }

    #[must_use]
    pub fn previous(&self, name: MetricName) -> Option<f64> {
        self.cumulative.get(&name).copied()
    }

    #[must_use]
    pub fn series(&self, name: MetricName) -> &[f64] {
        self.series.get(&name).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub(crate) fn begin_tick(&mut self) -> u64 {
        self.ticks = self.ticks.saturating_add(1);
        self.ticks
    }
}
