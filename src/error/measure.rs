use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use super::SourceError;

#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("Failed to gather snapshot on tick {tick}: {source}")]
    Snapshot {
        tick: u64,
        #[source]
        source: SourceError,
    },
    #[error("Sampling interval {interval:?} cannot be scheduled.")]
    InvalidInterval { interval: Duration },
    #[error("Sampler task failed: {source}")]
    Join {
        #[source]
        source: tokio::task::JoinError,
    },
    #[error("Failed to export session to '{path}': {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize session: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
