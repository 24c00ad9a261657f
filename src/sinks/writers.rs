use tokio::fs::OpenOptions;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::error::SinkError;

use super::config::InfluxSinkConfig;
use super::format::influx_line;
use super::{GaugeUpdate, TelemetrySink};

/// Appends live readings to a file in Influx line protocol.
///
/// Readings are queued on an unbounded channel and written by a background
/// task, so [`TelemetrySink::gauge`] never waits on disk.
#[derive(Debug, Clone)]
pub struct InfluxSink {
    tx: mpsc::UnboundedSender<GaugeUpdate>,
}

impl InfluxSink {
    /// Open (or create) the target file and start the writer task.
    ///
    /// The returned handle completes once every clone of the sink has been
    /// dropped and the queue is flushed.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be opened for appending.
    pub async fn create(config: &InfluxSinkConfig) -> Result<(Self, JoinHandle<()>), SinkError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.path)
            .await
            .map_err(|err| SinkError::OpenInflux {
                path: config.path.clone(),
                source: err,
            })?;
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(write_influx_lines(BufWriter::new(file), rx));
        Ok((Self { tx }, handle))
    }
}

impl TelemetrySink for InfluxSink {
    fn gauge(&self, name: &str, value: f64) {
        drop(self.tx.send(GaugeUpdate::now(name, value)));
    }
}

async fn write_influx_lines<W>(mut writer: W, mut rx: mpsc::UnboundedReceiver<GaugeUpdate>)
where
    W: AsyncWrite + Unpin,
{
    let mut last_sink_error: Option<String> = None;
    while let Some(update) = rx.recv().await {
        let Some(line) = influx_line(&update) else {
            continue;
        };
        let result = match writer.write_all(line.as_bytes()).await {
            Ok(()) => writer.flush().await,
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                last_sink_error = None;
            }
            Err(err) => {
                let err = SinkError::WriteInflux { source: err };
                let err_message = err.to_string();
                if last_sink_error.as_deref() != Some(err_message.as_str()) {
                    warn!("Failed to write Influx sink: {}", err);
                    last_sink_error = Some(err_message);
                }
            }
        }
    }
    if let Err(err) = writer.flush().await {
        warn!("Failed to flush Influx sink: {}", err);
    }
}
