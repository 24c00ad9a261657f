//! End-of-session report: one chart per recorded series under a parameter
//! header, plus warnings for series that never received a sample.
mod export;
mod summary;


use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::charts::{PlotOptions, plot};
use crate::measure::{MetricName, Session};

pub use export::{export_json, session_json};
pub use summary::SeriesSummary;

pub const REPORT_CHART_WIDTH: usize = 100;
pub const REPORT_CHART_HEIGHT: usize = 10;
pub const REPORT_CHART_OFFSET: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub chart_width: usize,
    pub chart_height: usize,
    pub chart_offset: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            chart_width: REPORT_CHART_WIDTH,
            chart_height: REPORT_CHART_HEIGHT,
            chart_offset: REPORT_CHART_OFFSET,
        }
    }
}

impl ReportOptions {
    fn plot_options(&self, metric: MetricName) -> PlotOptions {
        PlotOptions::new()
            .caption(metric.as_str())
            .width(self.chart_width)
            .height(self.chart_height)
            .offset(self.chart_offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub body: String,
    pub warnings: Vec<String>,
}

impl Report {
    /// Emit the warnings, then the whole body as a single event.
    pub fn emit(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
        info!("{}", self.body);
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Render the report for a finished session. Pure: nothing is emitted.
#[must_use]
pub fn render_report(
    session: &Session,
    params: &BTreeMap<String, String>,
    options: &ReportOptions,
) -> Report {
    let mut lines = vec![format!("Test params: {}", format_params(params))];
    let mut warnings = Vec::new();
    for metric in MetricName::ALL {
        let series = session.series(metric);
        let Some(summary) = SeriesSummary::from_series(series) else {
            warnings.push(format!("WARNING: No metrics for {}!", metric));
            continue;
        };
        lines.push(plot(series, &options.plot_options(metric)));
        lines.push(summary.line(metric));
    }
    Report {
        body: lines.join("\n"),
        warnings,
    }
}

pub(crate) fn format_params(params: &BTreeMap<String, String>) -> String {
    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    format!("{{{}}}", pairs.join(", "))
}
