use std::time::Duration;

use tempfile::tempdir;

use super::types::{ChartConfig, ConfigFile, DurationValue};
use super::{SessionSettings, apply_config, load_config_file, parse_duration_value, parse_param};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

#[test]
fn parse_toml_config_with_sinks_and_chart() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("resprobe.toml");
    let content = r#"
interval = "500ms"
duration = 30
proc_root = "/host/proc"
loopback_devices = ["lo", "docker0"]

[params]
build = "release"

[chart]
width = 60
height = 8

[sinks]
log = true

[sinks.influx]
path = "metrics.lp"
"#;
    std::fs::write(&path, content)?;

    let config = load_config_file(&path)?;
    if config.proc_root.as_deref() != Some("/host/proc") {
        return Err(AppError::config("Unexpected proc_root"));
    }
    let Some(sinks) = config.sinks.as_ref() else {
        return Err(AppError::config("Expected sinks table"));
    };
    if sinks.log != Some(true) {
        return Err(AppError::config("Expected log sink enabled"));
    }
    match sinks.influx.as_ref() {
        Some(influx) if influx.path == "metrics.lp" => {}
        _ => return Err(AppError::config("Expected influx sink path")),
    }

    let mut settings = SessionSettings::default();
    apply_config(&mut settings, config)?;
    if settings.interval != Duration::from_millis(500) {
        return Err(AppError::config(format!(
            "Unexpected interval: {:?}",
            settings.interval
        )));
    }
    if settings.duration != Some(Duration::from_secs(30)) {
        return Err(AppError::config("Unexpected duration"));
    }
    if settings.params.get("build").map(String::as_str) != Some("release") {
        return Err(AppError::config("Expected build param"));
    }
    if settings.report.chart_width != 60 || settings.report.chart_height != 8 {
        return Err(AppError::config("Chart overrides not applied"));
    }
    if settings.report.chart_offset != 10 {
        return Err(AppError::config("Chart offset should keep its default"));
    }
    if settings.loopback_devices != vec!["lo".to_owned(), "docker0".to_owned()] {
        return Err(AppError::config("Unexpected loopback devices"));
    }
    Ok(())
}

#[test]
fn parse_json_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("resprobe.json");
    let content = r#"{
  "interval": 2,
  "cpu_excluded_modes": ["idle"],
  "export_json": "session.json"
}"#;
    std::fs::write(&path, content)?;

    let config = load_config_file(&path)?;
    let mut settings = SessionSettings::default();
    apply_config(&mut settings, config)?;
    if settings.interval != Duration::from_secs(2) {
        return Err(AppError::config("Unexpected interval"));
    }
    if settings.cpu_excluded_modes != vec!["idle".to_owned()] {
        return Err(AppError::config("Unexpected cpu excluded modes"));
    }
    match settings.export_json.as_deref() {
        Some(path) if path.ends_with("session.json") => Ok(()),
        _ => Err(AppError::config("Expected export path")),
    }
}

#[test]
fn unsupported_extension_is_rejected() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("resprobe.yaml");
    std::fs::write(&path, "interval: 1")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected extension error")),
    }
}

#[test]
fn malformed_toml_reports_path() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "interval = [")?;
    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { path: reported, .. })) if reported == path => {
            Ok(())
        }
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected parse error")),
    }
}

#[test]
fn zero_chart_height_is_rejected() -> AppResult<()> {
    let config = ConfigFile {
        chart: Some(ChartConfig {
            width: None,
            height: Some(0),
            offset: None,
        }),
        ..ConfigFile::default()
    };
    let mut settings = SessionSettings::default();
    match apply_config(&mut settings, config) {
        Err(AppError::Config(ConfigError::InvalidField {
            field: "chart.height",
            source: ValidationError::ChartDimensionTooSmall { min: 1, .. },
        })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => Err(AppError::config("Expected chart height error")),
    }
}

#[test]
fn zero_interval_is_rejected() -> AppResult<()> {
    let config = ConfigFile {
        interval: Some(DurationValue::Seconds(0)),
        ..ConfigFile::default()
    };
    let mut settings = SessionSettings::default();
    match apply_config(&mut settings, config) {
        Err(AppError::Config(ConfigError::InvalidField {
            field: "interval",
            source: ValidationError::DurationZero,
        })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => Err(AppError::config("Expected zero interval error")),
    }
}

#[test]
fn parse_duration_value_units() -> AppResult<()> {
    let cases = [
        ("250ms", Duration::from_millis(250)),
        ("15", Duration::from_secs(15)),
        ("15s", Duration::from_secs(15)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_value(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "{} parsed as {:?}",
                input, parsed
            )));
        }
    }
    for bad in ["", "ms", "5d", "0s"] {
        if parse_duration_value(bad).is_ok() {
            return Err(AppError::validation(format!("{} should be rejected", bad)));
        }
    }
    Ok(())
}

#[test]
fn parse_param_splits_on_first_equals() -> AppResult<()> {
    let (key, value) = parse_param("query=a=b")?;
    if key != "query" || value != "a=b" {
        return Err(AppError::validation(format!("Unexpected pair {}={}", key, value)));
    }
    let (_, empty) = parse_param("flag=")?;
    if !empty.is_empty() {
        return Err(AppError::validation("Empty value should be kept"));
    }
    match parse_param("novalue") {
        Err(ValidationError::InvalidParamFormat { .. }) => {}
        other => {
            return Err(AppError::validation(format!("Unexpected result: {:?}", other)));
        }
    }
    match parse_param("=value") {
        Err(ValidationError::ParamKeyEmpty { .. }) => Ok(()),
        other => Err(AppError::validation(format!("Unexpected result: {:?}", other))),
    }
}

#[test]
fn unschedulable_durations_are_rejected() -> AppResult<()> {
    match parse_duration_value("18446744073709551615s") {
        Err(ValidationError::DurationOverflow) => {}
        other => {
            return Err(AppError::validation(format!("Unexpected result: {:?}", other)));
        }
    }
    let config = ConfigFile {
        interval: Some(DurationValue::Seconds(u64::MAX)),
        ..ConfigFile::default()
    };
    let mut settings = SessionSettings::default();
    match apply_config(&mut settings, config) {
        Err(AppError::Config(ConfigError::InvalidField {
            field: "interval",
            source: ValidationError::DurationOverflow,
        })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => Err(AppError::config("Expected overflow error")),
    }
}

#[test]
fn oversized_chart_dimensions_are_rejected() -> AppResult<()> {
    for (chart, expected_field) in [
        (
            ChartConfig {
                width: Some(usize::MAX),
                height: None,
                offset: None,
            },
            "chart.width",
        ),
        (
            ChartConfig {
                width: None,
                height: Some(crate::charts::MAX_HEIGHT + 1),
                offset: None,
            },
            "chart.height",
        ),
        (
            ChartConfig {
                width: None,
                height: None,
                offset: Some(crate::charts::MAX_OFFSET + 1),
            },
            "chart.offset",
        ),
    ] {
        let config = ConfigFile {
            chart: Some(chart),
            ..ConfigFile::default()
        };
        let mut settings = SessionSettings::default();
        match apply_config(&mut settings, config) {
            Err(AppError::Config(ConfigError::InvalidField {
                field,
                source: ValidationError::ChartDimensionTooLarge { .. },
            })) if field == expected_field => {}
            Err(err) => {
                return Err(AppError::config(format!("Unexpected error: {}", err)));
            }
            Ok(()) => {
                return Err(AppError::config(format!(
                    "Expected {} to be rejected",
                    expected_field
                )));
            }
        }
    }
    Ok(())
}
