use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::charts::{MAX_HEIGHT, MAX_OFFSET, MAX_WIDTH};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};
use crate::measure::{
    DEFAULT_CPU_EXCLUDED_MODES, DEFAULT_LOOPBACK_DEVICES, DEFAULT_SAMPLE_INTERVAL, RuleSet,
    SamplerSettings,
};
use crate::report::ReportOptions;
use crate::sinks::config::SinksConfig;
use crate::source::DEFAULT_PROC_ROOT;

use super::types::{ChartConfig, ConfigFile};

const MIN_CHART_HEIGHT: usize = 1;
const MIN_CHART_OFFSET: usize = 1;

/// Fully resolved settings for one sampling session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub interval: Duration,
    /// `None` runs until a signal or the workload exits.
    pub duration: Option<Duration>,
    pub params: BTreeMap<String, String>,
    pub proc_root: PathBuf,
    pub cpu_excluded_modes: Vec<String>,
    pub loopback_devices: Vec<String>,
    pub sinks: SinksConfig,
    pub export_json: Option<PathBuf>,
    pub report: ReportOptions,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SAMPLE_INTERVAL,
            duration: None,
            params: BTreeMap::new(),
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
            cpu_excluded_modes: DEFAULT_CPU_EXCLUDED_MODES
                .iter()
                .map(|mode| (*mode).to_owned())
                .collect(),
            loopback_devices: DEFAULT_LOOPBACK_DEVICES
                .iter()
                .map(|device| (*device).to_owned())
                .collect(),
            sinks: SinksConfig::default(),
            export_json: None,
            report: ReportOptions::default(),
        }
    }
}

impl SessionSettings {
    #[must_use]
    pub fn sampler_settings(&self) -> SamplerSettings {
        SamplerSettings {
            interval: self.interval,
            rules: RuleSet::new(
                self.cpu_excluded_modes.iter().cloned(),
                self.loopback_devices.iter().cloned(),
            ),
        }
    }
}

/// Applies configuration file values on top of `settings`.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn apply_config(settings: &mut SessionSettings, config: ConfigFile) -> AppResult<()> {
    if let Some(interval) = config.interval.as_ref() {
        settings.interval = interval
            .to_duration()
            .map_err(|err| invalid_field("interval", err))?;
    }

    if let Some(duration) = config.duration.as_ref() {
        settings.duration = Some(
            duration
                .to_duration()
                .map_err(|err| invalid_field("duration", err))?,
        );
    }

    if let Some(params) = config.params {
        for (key, value) in params {
            if key.trim().is_empty() {
                return Err(invalid_field(
                    "params",
                    ValidationError::ParamKeyEmpty {
                        value: format!("{}={}", key, value),
                    },
                ));
            }
            settings.params.insert(key, value);
        }
    }

    if let Some(root) = config.proc_root {
        settings.proc_root = PathBuf::from(root);
    }

    if let Some(devices) = config.loopback_devices {
        settings.loopback_devices = devices;
    }

    if let Some(modes) = config.cpu_excluded_modes {
        settings.cpu_excluded_modes = modes;
    }

    if let Some(path) = config.export_json {
        if path.trim().is_empty() {
            return Err(AppError::config(ConfigError::EmptyList {
                field: "export_json",
            }));
        }
        settings.export_json = Some(PathBuf::from(path));
    }

    if let Some(chart) = config.chart {
        apply_chart(&mut settings.report, chart)?;
    }

    if let Some(sinks) = config.sinks {
        if let Some(log) = sinks.log {
            settings.sinks.log = Some(log);
        }
        if let Some(influx) = sinks.influx {
            settings.sinks.influx = Some(influx);
        }
    }

    Ok(())
}

fn apply_chart(report: &mut ReportOptions, chart: ChartConfig) -> AppResult<()> {
    if let Some(width) = chart.width {
        report.chart_width = ensure_within(width, 0, MAX_WIDTH, "chart.width")?;
    }
    if let Some(height) = chart.height {
        report.chart_height =
            ensure_within(height, MIN_CHART_HEIGHT, MAX_HEIGHT, "chart.height")?;
    }
    if let Some(offset) = chart.offset {
        report.chart_offset =
            ensure_within(offset, MIN_CHART_OFFSET, MAX_OFFSET, "chart.offset")?;
    }
    Ok(())
}

fn ensure_within(value: usize, min: usize, max: usize, field: &'static str) -> AppResult<usize> {
    if value < min {
        return Err(invalid_field(
            field,
            ValidationError::ChartDimensionTooSmall { field, min },
        ));
    }
    if value > max {
        return Err(invalid_field(
            field,
            ValidationError::ChartDimensionTooLarge { field, max },
        ));
    }
    Ok(value)
}

fn invalid_field(field: &'static str, source: ValidationError) -> AppError {
    AppError::config(ConfigError::InvalidField { field, source })
}
