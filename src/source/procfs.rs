use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SourceError;

use super::types::{
    FAMILY_CPU_SECONDS, FAMILY_MEMORY_ACTIVE_BYTES, FAMILY_NETWORK_RECEIVE_BYTES,
    FAMILY_NETWORK_TRANSMIT_BYTES, LabeledPoint, MetricFamily, MetricSource,
};

pub const DEFAULT_PROC_ROOT: &str = "/proc";

/// Fallback USER_HZ when `sysconf` cannot report it.
const DEFAULT_CLOCK_TICKS: f64 = 100.0;
/// `/proc/stat` cpu columns in kernel order, after the `cpuN` label.
const CPU_MODES: [&str; 8] = [
    "user", "nice", "system", "idle", "iowait", "irq", "softirq", "steal",
];
/// Column of transmitted bytes in a `/proc/net/dev` row, after the device.
const NET_DEV_TRANSMIT_BYTES_COLUMN: usize = 8;
const KIB: f64 = 1024.0;

/// Reads CPU, memory and network counters from a Linux `/proc` tree.
#[derive(Debug, Clone)]
pub struct ProcfsSource {
    root: PathBuf,
    clock_ticks: f64,
}

impl ProcfsSource {
    /// Open a source rooted at `root` (usually `/proc`).
    ///
    /// # Errors
    ///
    /// Returns an error when `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(SourceError::RootNotDirectory { path: root });
        }
        let clock_ticks = clock_ticks_per_second();
        debug!(root = %root.display(), clock_ticks, "Opened procfs metric source");
        Ok(Self { root, clock_ticks })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, relative: &str) -> Result<String, SourceError> {
        let path = self.root.join(relative);
        std::fs::read_to_string(&path).map_err(|err| SourceError::Read { path, source: err })
    }
}

impl MetricSource for ProcfsSource {
    fn gather(&mut self) -> Result<Vec<MetricFamily>, SourceError> {
        let stat = self.read("stat")?;
        let meminfo = self.read("meminfo")?;
        let net_dev = self.read("net/dev")?;

        let mut families = Vec::with_capacity(4);
        families.extend(parse_stat(&stat, self.clock_ticks));
        families.extend(parse_meminfo(&meminfo));
        let (receive, transmit) = parse_net_dev(&net_dev);
        families.extend(receive);
        families.extend(transmit);
        Ok(families)
    }
}

/// Parse per-CPU lines of `/proc/stat` into `node_cpu_seconds_total{cpu, mode}`.
///
/// The aggregate `cpu` line is skipped. Returns `None` when no per-CPU line
/// is present.
#[must_use]
pub fn parse_stat(content: &str, clock_ticks: f64) -> Option<MetricFamily> {
    let clock_ticks = if clock_ticks > 0.0 {
        clock_ticks
    } else {
        DEFAULT_CLOCK_TICKS
    };
    let mut points = Vec::new();
    for line in content.lines() {
        let mut fields = line.split_whitespace();
        let Some(cpu) = fields.next().and_then(|label| label.strip_prefix("cpu")) else {
            continue;
        };
        if cpu.is_empty() || !cpu.chars().all(|ch| ch.is_ascii_digit()) {
            continue;
        }
        for (mode, raw) in CPU_MODES.iter().zip(fields) {
            let Ok(jiffies) = raw.parse::<u64>() else {
                break;
            };
            points.push(
                LabeledPoint::counter(jiffies as f64 / clock_ticks)
                    .with_label("cpu", cpu)
                    .with_label("mode", mode),
            );
        }
    }
    if points.is_empty() {
        None
    } else {
        Some(MetricFamily::new(FAMILY_CPU_SECONDS, points))
    }
}

/// Parse the `Active:` line of `/proc/meminfo` into a bytes gauge.
#[must_use]
pub fn parse_meminfo(content: &str) -> Option<MetricFamily> {
    content.lines().find_map(|line| {
        let (key, rest) = line.split_once(':')?;
        if key.trim() != "Active" {
            return None;
        }
        let mut parts = rest.split_whitespace();
        let amount = parts.next()?.parse::<u64>().ok()?;
        let bytes = match parts.next() {
            Some("kB") => amount as f64 * KIB,
            Some(_) => return None,
            None => amount as f64,
        };
        Some(MetricFamily::new(
            FAMILY_MEMORY_ACTIVE_BYTES,
            vec![LabeledPoint::gauge(bytes)],
        ))
    })
}

/// Parse `/proc/net/dev` into receive and transmit byte counters by device.
#[must_use]
pub fn parse_net_dev(content: &str) -> (Option<MetricFamily>, Option<MetricFamily>) {
    let mut receive = Vec::new();
    let mut transmit = Vec::new();
    for line in content.lines() {
        let Some((device, counters)) = line.split_once(':') else {
            continue;
        };
        let device = device.trim();
        if device.is_empty() || device.contains('|') {
            continue;
        }
        let columns: Vec<&str> = counters.split_whitespace().collect();
        let rx = columns.first().and_then(|raw| raw.parse::<u64>().ok());
        let tx = columns
            .get(NET_DEV_TRANSMIT_BYTES_COLUMN)
            .and_then(|raw| raw.parse::<u64>().ok());
        let (Some(rx), Some(tx)) = (rx, tx) else {
            continue;
        };
        receive.push(LabeledPoint::counter(rx as f64).with_label("device", device));
        transmit.push(LabeledPoint::counter(tx as f64).with_label("device", device));
    }
    let family = |name: &str, points: Vec<LabeledPoint>| {
        if points.is_empty() {
            None
        } else {
            Some(MetricFamily::new(name, points))
        }
    };
    (
        family(FAMILY_NETWORK_RECEIVE_BYTES, receive),
        family(FAMILY_NETWORK_TRANSMIT_BYTES, transmit),
    )
}

fn clock_ticks_per_second() -> f64 {
    #[cfg(unix)]
    {
        // SAFETY: sysconf only reads a process-wide configuration value.
        let hz = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
        if hz > 0 {
            return hz as f64;
        }
    }
    DEFAULT_CLOCK_TICKS
}
