use std::time::Duration;

use tokio::{
    task::JoinHandle,
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, error, info};

use crate::error::MeasureError;
use crate::shutdown::{ShutdownReceiver, ShutdownSender};
use crate::sinks::TelemetrySink;
use crate::source::{MetricFamily, MetricSource};

use super::rules::RuleSet;
use super::state::Session;

pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Result of a finished sampling session.
pub type SessionOutcome = Result<Session, MeasureError>;

#[derive(Debug, Clone)]
pub struct SamplerSettings {
    pub interval: Duration,
    pub rules: RuleSet,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            interval: DEFAULT_SAMPLE_INTERVAL,
            rules: RuleSet::default(),
        }
    }
}

/// Handle to the background collection loop.
///
/// The loop owns its [`Session`] until [`Sampler::stop`] joins it, so the
/// caller only ever reads a session the loop has finished writing.
#[derive(Debug)]
pub struct Sampler {
    shutdown_tx: ShutdownSender,
    task: Option<JoinHandle<SessionOutcome>>,
}

impl Sampler {
    /// Spawn the collection loop on the current tokio runtime.
    ///
    /// The first tick fires one full interval after start. A shutdown sent on
    /// `shutdown_tx` by anyone (signal handler, workload watcher, [`stop`])
    /// ends the loop at the next tick boundary.
    ///
    /// [`stop`]: Sampler::stop
    #[must_use]
    pub fn start<S, K>(
        source: S,
        sink: K,
        settings: SamplerSettings,
        shutdown_tx: &ShutdownSender,
    ) -> Self
    where
        S: MetricSource,
        K: TelemetrySink,
    {
        let shutdown_rx = shutdown_tx.subscribe();
        let task = tokio::spawn(collect(
            source,
            sink,
            settings,
            shutdown_rx,
            shutdown_tx.clone(),
        ));
        Self {
            shutdown_tx: shutdown_tx.clone(),
            task: Some(task),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Signal the loop and wait for it to exit.
    ///
    /// The first call returns the session outcome; later calls return `None`.
    pub async fn stop(&mut self) -> Option<SessionOutcome> {
        let task = self.task.take()?;
        drop(self.shutdown_tx.send(()));
        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(err) => Err(MeasureError::Join { source: err }),
        };
        Some(outcome)
    }
}

impl Drop for Sampler {
    fn drop(&mut self) {
        if self.task.is_some() {
            drop(self.shutdown_tx.send(()));
        }
    }
}

async fn collect<S, K>(
    mut source: S,
    sink: K,
    settings: SamplerSettings,
    mut shutdown_rx: ShutdownReceiver,
    shutdown_tx: ShutdownSender,
) -> SessionOutcome
where
    S: MetricSource,
    K: TelemetrySink,
{
    let mut session = Session::new();
    let period = settings.interval;
    let first_tick = Instant::now()
        .checked_add(period)
        .filter(|_| !period.is_zero());
    let Some(first_tick) = first_tick else {
        error!(interval = ?period, "Sampling interval cannot be scheduled");
        drop(shutdown_tx.send(()));
        return Err(MeasureError::InvalidInterval { interval: period });
    };
    let mut interval = tokio::time::interval_at(first_tick, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    info!(interval = ?period, "Resource sampler started");

    loop {
        tokio::select! {
            biased;
            _ = shutdown_rx.recv() => break,
            _ = interval.tick() => {
                let tick = session.begin_tick();
                let families = match source.gather() {
                    Ok(families) => families,
                    Err(err) => {
                        error!(tick, "Failed to gather resource snapshot: {}", err);
                        drop(shutdown_tx.send(()));
                        return Err(MeasureError::Snapshot { tick, source: err });
                    }
                };
                apply_snapshot(&families, &settings.rules, &mut session, &sink);
            }
        }
    }

    debug!(ticks = session.ticks(), "Resource sampler stopped");
    Ok(session)
}

/// Dispatch every recognised family of one snapshot to its rule and forward
/// the resulting live value. Unknown families are ignored.
pub(crate) fn apply_snapshot<K>(
    families: &[MetricFamily],
    rules: &RuleSet,
    session: &mut Session,
    sink: &K,
) where
    K: TelemetrySink + ?Sized,
{
    for family in families {
        let Some(rule) = rules.rule_for(&family.name) else {
            continue;
        };
        if let Some(value) = rule.apply(&family.points, session) {
            sink.gauge(rule.metric.as_str(), value);
        }
    }
}
