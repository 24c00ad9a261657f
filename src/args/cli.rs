use std::time::Duration;

use clap::Parser;
use resprobe::config::SessionSettings;
use resprobe::sinks::config::InfluxSinkConfig;

use super::parsers::{
    parse_chart_height, parse_chart_offset, parse_chart_width, parse_duration_arg, parse_param_arg,
};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Sample CPU, memory and network usage while a workload runs, then chart it."
)]
pub struct SamplerArgs {
    /// Sample for a fixed time (supports ms/s/m/h; bare numbers are seconds)
    #[arg(short = 't', long = "duration", value_parser = parse_duration_arg)]
    pub duration: Option<Duration>,

    /// Sampling period (supports ms/s/m/h)
    #[arg(long = "interval", value_parser = parse_duration_arg)]
    pub interval: Option<Duration>,

    /// Session parameter shown in the report header (repeatable, key=value)
    #[arg(short = 'p', long = "param", value_parser = parse_param_arg)]
    pub params: Vec<(String, String)>,

    /// Root of the procfs tree to read
    #[arg(long = "proc-root", env = "RESPROBE_PROC_ROOT")]
    pub proc_root: Option<String>,

    /// Network device excluded from traffic totals (repeatable)
    #[arg(long = "loopback")]
    pub loopback: Vec<String>,

    /// CPU mode excluded from busy time (repeatable)
    #[arg(long = "cpu-exclude")]
    pub cpu_exclude: Vec<String>,

    /// Append live readings as Influx line protocol to this file
    #[arg(long = "influx")]
    pub influx: Option<String>,

    /// Log every live reading at debug level
    #[arg(long = "log-sink")]
    pub log_sink: bool,

    /// Write the finished session as JSON to this path
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Plotted columns per chart
    #[arg(long = "chart-width", value_parser = parse_chart_width)]
    pub chart_width: Option<usize>,

    /// Rows per chart
    #[arg(long = "chart-height", value_parser = parse_chart_height)]
    pub chart_height: Option<usize>,

    /// Label margin per chart, axis included
    #[arg(long = "chart-offset", value_parser = parse_chart_offset)]
    pub chart_offset: Option<usize>,

    /// Path to a TOML or JSON config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Workload to run while sampling; sampling stops when it exits
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl SamplerArgs {
    /// Overlay every flag given on the command line onto `settings`.
    pub fn apply_to(&self, settings: &mut SessionSettings) {
        if let Some(duration) = self.duration {
            settings.duration = Some(duration);
        }
        if let Some(interval) = self.interval {
            settings.interval = interval;
        }
        for (key, value) in &self.params {
            settings.params.insert(key.clone(), value.clone());
        }
        if let Some(root) = self.proc_root.as_ref() {
            settings.proc_root = root.into();
        }
        if !self.loopback.is_empty() {
            settings.loopback_devices.clone_from(&self.loopback);
        }
        if !self.cpu_exclude.is_empty() {
            settings.cpu_excluded_modes.clone_from(&self.cpu_exclude);
        }
        if let Some(path) = self.influx.as_ref() {
            settings.sinks.influx = Some(InfluxSinkConfig { path: path.clone() });
        }
        if self.log_sink {
            settings.sinks.log = Some(true);
        }
        if let Some(path) = self.export_json.as_ref() {
            settings.export_json = Some(path.into());
        }
        if let Some(width) = self.chart_width {
            settings.report.chart_width = width;
        }
        if let Some(height) = self.chart_height {
            settings.report.chart_height = height;
        }
        if let Some(offset) = self.chart_offset {
            settings.report.chart_offset = offset;
        }
    }
}
