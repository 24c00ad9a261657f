//! Raw metric sources: point-in-time snapshots of labeled counter and gauge
//! families, shaped after node-exporter output.
mod procfs;
mod scripted;
mod types;


pub use procfs::{DEFAULT_PROC_ROOT, ProcfsSource, parse_meminfo, parse_net_dev, parse_stat};
pub use scripted::ScriptedSource;
pub use types::{
    FAMILY_CPU_SECONDS, FAMILY_MEMORY_ACTIVE_BYTES, FAMILY_NETWORK_RECEIVE_BYTES,
    FAMILY_NETWORK_TRANSMIT_BYTES, LabeledPoint, MetricFamily, MetricSource, PointValue,
};
