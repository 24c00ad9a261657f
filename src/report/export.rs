use std::collections::BTreeMap;
use std::path::Path;

use chrono::SecondsFormat;

use crate::error::MeasureError;
use crate::measure::{MetricName, Session};

use super::summary::SeriesSummary;

#[must_use]
pub fn session_json(session: &Session, params: &BTreeMap<String, String>) -> serde_json::Value {
    let mut metrics = serde_json::Map::new();
    for metric in MetricName::ALL {
        let series = session.series(metric);
        let summary = SeriesSummary::from_series(series).map(|summary| {
            serde_json::json!({
                "samples": summary.samples,
                "min": summary.min,
                "max": summary.max,
                "avg": summary.avg,
                "last": summary.last
            })
        });
        metrics.insert(
            metric.as_str().to_owned(),
            serde_json::json!({
                "series": series,
                "summary": summary
            }),
        );
    }

    serde_json::json!({
        "started_at": session.started_at().to_rfc3339_opts(SecondsFormat::Millis, true),
        "ticks": session.ticks(),
        "params": params,
        "metrics": metrics
    })
}

/// Write the session series and summaries as pretty JSON.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub async fn export_json(
    path: &Path,
    session: &Session,
    params: &BTreeMap<String, String>,
) -> Result<(), MeasureError> {
    let json = serde_json::to_vec_pretty(&session_json(session, params))
        .map_err(|err| MeasureError::Serialize { source: err })?;
    tokio::fs::write(path, json)
        .await
        .map_err(|err| MeasureError::Export {
            path: path.to_path_buf(),
            source: err,
        })
}
