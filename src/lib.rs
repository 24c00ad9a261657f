//! Core library for the `resprobe` CLI.
//!
//! A background sampler reads CPU, active memory and network counters once
//! per interval, turns cumulative counters into per-interval deltas, forwards
//! live values to telemetry sinks, and keeps every series so the session can
//! be rendered as ASCII line charts when it stops.
pub mod charts;
pub mod config;
pub mod error;
pub mod measure;
pub mod report;
pub mod shutdown;
pub mod sinks;
pub mod source;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
