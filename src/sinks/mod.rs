//! Live telemetry sinks fed once per sampler tick.
pub mod config;
mod format;
mod writers;


use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::debug;

pub use format::influx_line;
pub use writers::InfluxSink;

/// One live reading pushed by the sampler.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeUpdate {
    pub name: String,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

impl GaugeUpdate {
    #[must_use]
    pub fn now(name: &str, value: f64) -> Self {
        Self {
            name: name.to_owned(),
            value,
            timestamp: Utc::now(),
        }
    }
}

/// Receives live gauge readings. Calls are fire-and-forget: implementations
/// must not block the sampler and must swallow their own failures.
pub trait TelemetrySink: Send + 'static {
    fn gauge(&self, name: &str, value: f64);
}

impl<T> TelemetrySink for Box<T>
where
    T: TelemetrySink + ?Sized,
{
    fn gauge(&self, name: &str, value: f64) {
        (**self).gauge(name, value);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl TelemetrySink for NoopSink {
    fn gauge(&self, _name: &str, _value: f64) {}
}

/// Emits every reading as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TelemetrySink for LogSink {
    fn gauge(&self, name: &str, value: f64) {
        debug!(metric = name, value, "gauge");
    }
}

/// Forwards readings into a caller-owned channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<GaugeUpdate>,
}

impl ChannelSink {
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<GaugeUpdate>) -> Self {
        Self { tx }
    }

    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<GaugeUpdate>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl TelemetrySink for ChannelSink {
    fn gauge(&self, name: &str, value: f64) {
        drop(self.tx.send(GaugeUpdate::now(name, value)));
    }
}

/// Hands every reading to each inner sink in order.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn TelemetrySink>>,
}

impl FanoutSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<S>(mut self, sink: S) -> Self
    where
        S: TelemetrySink,
    {
        self.sinks.push(Box::new(sink));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl TelemetrySink for FanoutSink {
    fn gauge(&self, name: &str, value: f64) {
        for sink in &self.sinks {
            sink.gauge(name, value);
        }
    }
}
