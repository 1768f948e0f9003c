// Launcher orchestration: one in-flight run driven by a periodic timer.

use crate::domain::ports::ResultSink;
use crate::domain::{
    FlightSnapshot, FlightState, FlightSummary, LaunchError, LaunchTuning, TargetZone,
};
use crate::use_cases::LaunchStatus;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::{Mutex, watch};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{info, warn};

/// Settings applied to every run started by a launcher.
#[derive(Debug, Clone, Copy)]
pub struct LauncherSettings {
    /// Wall-clock period between ticks.
    pub tick_interval: Duration,
    /// Simulation tuning; `time_step` is the simulated dt per tick.
    pub tuning: LaunchTuning,
    /// Zone the projectile has to reach.
    pub target: TargetZone,
}

type PendingSaves = Arc<StdMutex<JoinSet<()>>>;

/// Owns at most one running flight. Starting a new run replaces the current one.
///
/// Dropping the launcher stops the running flight and any save not yet flushed.
pub struct Launcher<S> {
    settings: LauncherSettings,
    sink: Arc<S>,
    status_tx: watch::Sender<LaunchStatus>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
    // Only locked for synchronous work; never held across an await.
    pending_saves: PendingSaves,
    flush_gate: Mutex<()>,
    next_run_id: AtomicU64,
}

impl<S> Launcher<S>
where
    S: ResultSink,
{
    pub fn new(settings: LauncherSettings, sink: S) -> Self {
        let (status_tx, _status_rx) = watch::channel(LaunchStatus::Idle);
        Self {
            settings,
            sink: Arc::new(sink),
            status_tx,
            in_flight: Mutex::new(None),
            pending_saves: Arc::new(StdMutex::new(JoinSet::new())),
            flush_gate: Mutex::new(()),
            next_run_id: AtomicU64::new(1),
        }
    }

    pub fn settings(&self) -> &LauncherSettings {
        &self.settings
    }

    /// Validates the launch and starts ticking; returns the new run id.
    pub async fn start(&self, angle_deg: f64, speed: f64) -> Result<u64, LaunchError> {
        self.settings.tuning.validate(angle_deg, speed)?;

        let mut in_flight = self.in_flight.lock().await;
        if let Some(previous) = in_flight.take() {
            previous.abort();
        }

        let run_id = self.next_run_id.fetch_add(1, Ordering::Relaxed);
        let state = FlightState::launch(
            angle_deg,
            speed,
            &self.settings.tuning,
            self.settings.target,
        );
        // Publishing the new id first makes any superseded task stop on its next tick.
        self.status_tx.send_replace(LaunchStatus::InFlight {
            run_id,
            snapshot: FlightSnapshot::from(&state),
        });

        info!(run_id, angle_deg, speed, "flight started");

        *in_flight = Some(tokio::spawn(flight_task(
            run_id,
            state,
            self.settings.tick_interval,
            self.settings.tuning.time_step,
            self.status_tx.clone(),
            self.sink.clone(),
            self.pending_saves.clone(),
        )));

        Ok(run_id)
    }

    /// Stops the current run, if any, and returns to idle.
    pub async fn cancel(&self) {
        let mut in_flight = self.in_flight.lock().await;
        if let Some(handle) = in_flight.take() {
            handle.abort();
        }
        let previous = self.status_tx.send_replace(LaunchStatus::Idle);
        if let LaunchStatus::InFlight { run_id, .. } = previous {
            info!(run_id, "flight cancelled");
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<LaunchStatus> {
        self.status_tx.subscribe()
    }

    pub fn status(&self) -> LaunchStatus {
        self.status_tx.borrow().clone()
    }

    /// Waits until `run_id` lands. None when the run was cancelled or replaced.
    pub async fn wait_for_outcome(&self, run_id: u64) -> Option<FlightSummary> {
        let mut status_rx = self.status_tx.subscribe();
        loop {
            {
                let status = status_rx.borrow_and_update();
                match &*status {
                    LaunchStatus::Landed {
                        run_id: landed,
                        summary,
                        ..
                    } if *landed == run_id => return Some(*summary),
                    LaunchStatus::InFlight { run_id: flying, .. } if *flying == run_id => {}
                    _ => return None,
                }
            }

            if status_rx.changed().await.is_err() {
                return None;
            }
        }
    }

    /// Waits for every result hand-off started so far.
    pub async fn flush_saves(&self) {
        // Concurrent flushes queue up so each one covers saves taken by the other.
        let _gate = self.flush_gate.lock().await;
        let mut pending = std::mem::take(&mut *lock_saves(&self.pending_saves));
        while pending.join_next().await.is_some() {}
    }
}

impl<S> Drop for Launcher<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.get_mut().take() {
            handle.abort();
        }
    }
}

fn lock_saves(pending_saves: &StdMutex<JoinSet<()>>) -> MutexGuard<'_, JoinSet<()>> {
    pending_saves.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn flight_task<S: ResultSink>(
    run_id: u64,
    mut state: FlightState,
    tick_interval: Duration,
    dt: f64,
    status_tx: watch::Sender<LaunchStatus>,
    sink: Arc<S>,
    pending_saves: PendingSaves,
) {
    let mut interval = tokio::time::interval(tick_interval);
    // The first tick completes immediately; launch state is already published.
    interval.tick().await;

    loop {
        interval.tick().await;

        let finished = state.tick(dt);
        let snapshot = FlightSnapshot::from(&state);
        if !publish_tick(run_id, snapshot, finished, &status_tx, &sink, &pending_saves) {
            return;
        }
    }
}

// Publishes one tick; false once the run is finished or superseded.
fn publish_tick<S: ResultSink>(
    run_id: u64,
    snapshot: FlightSnapshot,
    finished: Option<FlightSummary>,
    status_tx: &watch::Sender<LaunchStatus>,
    sink: &Arc<S>,
    pending_saves: &StdMutex<JoinSet<()>>,
) -> bool {
    // Held across the publish so a flush that saw the landing also sees its save.
    let mut pending = finished.map(|_| lock_saves(pending_saves));

    let next = match finished {
        Some(summary) => LaunchStatus::Landed {
            run_id,
            snapshot,
            summary,
        },
        None => LaunchStatus::InFlight { run_id, snapshot },
    };

    // Only the current run may publish.
    let published = status_tx.send_if_modified(|current| {
        if current.run_id() != Some(run_id) {
            return false;
        }
        *current = next;
        true
    });
    if !published {
        return false;
    }

    let (Some(summary), Some(pending)) = (finished, pending.as_mut()) else {
        return true;
    };

    info!(
        run_id,
        scored = summary.scored,
        range = summary.range,
        max_height = summary.max_height,
        time = summary.time,
        "flight landed"
    );

    // Reap finished saves so an unflushed launcher does not accumulate them.
    while pending.try_join_next().is_some() {}

    // Saving runs detached so a later start cannot cut it short.
    let sink = Arc::clone(sink);
    pending.spawn(async move {
        match sink.record(summary).await {
            Ok(id) => info!(run_id, %id, "result saved"),
            Err(error) => warn!(run_id, %error, "failed to save result"),
        }
    });
    false
}
