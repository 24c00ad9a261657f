use std::fmt;

use crate::source::{
    FAMILY_CPU_SECONDS, FAMILY_MEMORY_ACTIVE_BYTES, FAMILY_NETWORK_RECEIVE_BYTES,
    FAMILY_NETWORK_TRANSMIT_BYTES,
};

/// The four tracked series, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricName {
    CpuSeconds,
    ActiveMemoryMibs,
    ReceiveBytes,
    TransmitBytes,
}

impl MetricName {
    pub const ALL: [MetricName; 4] = [
        MetricName::CpuSeconds,
        MetricName::ActiveMemoryMibs,
        MetricName::ReceiveBytes,
        MetricName::TransmitBytes,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            MetricName::CpuSeconds => "cpu-seconds",
            MetricName::ActiveMemoryMibs => "active-memory-mibs",
            MetricName::ReceiveBytes => "receive-bytes",
            MetricName::TransmitBytes => "transmit-bytes",
        }
    }

    /// Name of the raw family this series is derived from.
    #[must_use]
    pub const fn family(self) -> &'static str {
        match self {
            MetricName::CpuSeconds => FAMILY_CPU_SECONDS,
            MetricName::ActiveMemoryMibs => FAMILY_MEMORY_ACTIVE_BYTES,
            MetricName::ReceiveBytes => FAMILY_NETWORK_RECEIVE_BYTES,
            MetricName::TransmitBytes => FAMILY_NETWORK_TRANSMIT_BYTES,
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
