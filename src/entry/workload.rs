use std::process::ExitStatus;

use resprobe::error::{AppError, AppResult, ValidationError};
use resprobe::shutdown::{ShutdownReceiver, ShutdownSender};
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// A child command sampled for the length of its run.
pub(super) struct Workload {
    program: String,
    handle: JoinHandle<AppResult<Option<ExitStatus>>>,
}

impl Workload {
    /// Spawn `command` and broadcast shutdown when it exits.
    ///
    /// If shutdown arrives first (duration elapsed, signal, sampler failure)
    /// the child is killed and no exit status is reported.
    pub(super) fn spawn(command: &[String], shutdown_tx: &ShutdownSender) -> AppResult<Option<Self>> {
        let Some((program, rest)) = command.split_first() else {
            return Ok(None);
        };
        let child = Command::new(program)
            .args(rest)
            .kill_on_drop(true)
            .spawn()?;
        info!(program = %program, pid = ?child.id(), "Workload started");

        let handle = tokio::spawn(watch(child, shutdown_tx.clone(), shutdown_tx.subscribe()));
        Ok(Some(Self {
            program: program.clone(),
            handle,
        }))
    }

    /// Wait for the watcher and turn a failing exit status into an error.
    pub(super) async fn finish(self) -> AppResult<()> {
        match self.handle.await?? {
            Some(status) if !status.success() => {
                Err(AppError::validation(ValidationError::WorkloadFailed {
                    program: self.program,
                    status: status.to_string(),
                }))
            }
            Some(_) | None => Ok(()),
        }
    }
}

async fn watch(
    mut child: Child,
    shutdown_tx: ShutdownSender,
    mut shutdown_rx: ShutdownReceiver,
) -> AppResult<Option<ExitStatus>> {
    let exited = tokio::select! {
        status = child.wait() => Some(status),
        _ = shutdown_rx.recv() => None,
    };
    match exited {
        Some(status) => {
            let status = status?;
            info!(%status, "Workload exited");
            drop(shutdown_tx.send(()));
            Ok(Some(status))
        }
        None => {
            if let Err(err) = child.kill().await {
                warn!("Failed to stop workload: {}", err);
            }
            Ok(None)
        }
    }
}
