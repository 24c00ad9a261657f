//! Thin wrappers exposed to the `cargo fuzz` targets.
use std::path::Path;
use std::time::Duration;

use crate::charts::{PlotOptions, plot};
use crate::config::types::ConfigFile;
use crate::config::{SessionSettings, apply_config, load_config_file, parse_duration_value, parse_param};
use crate::error::{AppError, AppResult, ValidationError};
use crate::source::{MetricFamily, parse_meminfo, parse_net_dev, parse_stat};

#[must_use]
pub fn parse_stat_input(input: &str) -> Option<MetricFamily> {
    parse_stat(input, 100.0)
}

#[must_use]
pub fn parse_meminfo_input(input: &str) -> Option<MetricFamily> {
    parse_meminfo(input)
}

#[must_use]
pub fn parse_net_dev_input(input: &str) -> (Option<MetricFamily>, Option<MetricFamily>) {
    parse_net_dev(input)
}

/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_value_input(input: &str) -> Result<Duration, ValidationError> {
    parse_duration_value(input)
}

/// # Errors
///
/// Returns an error when the param is not `key=value`.
pub fn parse_param_input(input: &str) -> Result<(String, String), ValidationError> {
    parse_param(input)
}

/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_config_file_input(path: &Path) -> AppResult<ConfigFile> {
    load_config_file(path)
}

/// Parse TOML config text and apply it over default settings.
///
/// # Errors
///
/// Returns an error when parsing fails or a value is invalid.
pub fn apply_config_from_toml(input: &str) -> AppResult<SessionSettings> {
    let config: ConfigFile = toml::from_str(input)
        .map_err(|err| AppError::config(crate::error::ConfigError::ParseToml {
            path: "<fuzz>".into(),
            source: err,
        }))?;
    let mut settings = SessionSettings::default();
    apply_config(&mut settings, config)?;
    Ok(settings)
}

#[must_use]
pub fn plot_input(values: &[f64], width: usize, height: usize, offset: usize) -> String {
    let options = PlotOptions::new()
        .width(width)
        .height(height)
        .offset(offset);
    plot(values, &options)
}
