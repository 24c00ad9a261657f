use std::collections::VecDeque;

use crate::error::SourceError;

use super::types::{MetricFamily, MetricSource};

/// Replays a fixed sequence of snapshots, one per gather.
///
/// Once the script runs out every further gather fails with
/// [`SourceError::Exhausted`].
#[derive(Debug, Default)]
pub struct ScriptedSource {
    snapshots: VecDeque<Vec<MetricFamily>>,
    served: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(snapshots: Vec<Vec<MetricFamily>>) -> Self {
        Self {
            snapshots: snapshots.into(),
            served: 0,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.snapshots.len()
    }
}

impl MetricSource for ScriptedSource {
    fn gather(&mut self) -> Result<Vec<MetricFamily>, SourceError> {
        let snapshot = self
            .snapshots
            .pop_front()
            .ok_or(SourceError::Exhausted { ticks: self.served })?;
        self.served = self.served.saturating_add(1);
        Ok(snapshot)
    }
}
