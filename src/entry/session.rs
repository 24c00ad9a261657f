use resprobe::config::SessionSettings;
use resprobe::error::{AppError, AppResult};
use resprobe::measure::Sampler;
use resprobe::report::{export_json, render_report};
use resprobe::shutdown::shutdown_channel;
use resprobe::sinks::{FanoutSink, InfluxSink, LogSink};
use resprobe::source::ProcfsSource;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::shutdown_handlers::setup_signal_shutdown_handler;

use super::workload::Workload;

pub(super) async fn run_session(settings: &SessionSettings, command: &[String]) -> AppResult<()> {
    let source = ProcfsSource::open(&settings.proc_root)?;
    let (sink, influx_writer) = build_sink(settings).await?;

    let (shutdown_tx, _) = shutdown_channel();
    let mut stop_rx = shutdown_tx.subscribe();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);
    let workload = Workload::spawn(command, &shutdown_tx)?;

    let mut sampler = Sampler::start(source, sink, settings.sampler_settings(), &shutdown_tx);

    match settings.duration {
        Some(duration) => {
            tokio::select! {
                _ = stop_rx.recv() => {}
                () = tokio::time::sleep(duration) => {
                    info!(?duration, "Sampling duration elapsed");
                }
            }
        }
        None => {
            drop(stop_rx.recv().await);
        }
    }

    let outcome = sampler.stop().await;
    drop(shutdown_tx.send(()));
    if let Err(err) = signal_handle.await {
        warn!("Signal handler task failed: {}", err);
    }
    drop(sampler);
    if let Some(writer) = influx_writer
        && let Err(err) = writer.await
    {
        warn!("Influx writer task failed: {}", err);
    }

    let Some(outcome) = outcome else {
        return Ok(());
    };
    let session = outcome?;

    let report = render_report(&session, &settings.params, &settings.report);
    report.emit();

    if let Some(path) = settings.export_json.as_deref() {
        export_json(path, &session, &settings.params).await?;
        info!(path = %path.display(), "Session exported");
    }

    if let Some(workload) = workload {
        workload.finish().await?;
    }
    Ok(())
}

async fn build_sink(settings: &SessionSettings) -> AppResult<(FanoutSink, Option<JoinHandle<()>>)> {
    let mut sink = FanoutSink::new();
    if settings.sinks.log.unwrap_or(false) {
        sink = sink.with(LogSink);
    }
    let mut writer = None;
    if let Some(config) = settings.sinks.influx.as_ref() {
        let (influx, handle) = InfluxSink::create(config).await.map_err(AppError::sink)?;
        info!(path = %config.path, "Influx sink enabled");
        sink = sink.with(influx);
        writer = Some(handle);
    }
    Ok((sink, writer))
}
