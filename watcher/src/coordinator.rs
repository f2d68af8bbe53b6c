//! Coordinator task: owns the [`WatchState`] and serializes cycles.
//!
//! DESIGN
//! ======
//! Change events and cycle completions both arrive as messages, so a single
//! task owns the state and no lock is needed. Each cycle runs in its own
//! spawned task and reports back on the completion channel.
//!
//! The `select!` is biased toward change events: every event already queued
//! when a cycle finishes is folded into the pending path before the
//! completion is handled, so one follow-up cycle covers all of them.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cycle::{CycleOutcome, commit_message, run_cycle};
use crate::state::WatchState;
use crate::vcs::Vcs;

#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Root of the watched tree; commit messages show paths relative to it.
    pub root: PathBuf,
    pub message_prefix: String,
}

/// Every cycle the coordinator ran, in order.
#[derive(Debug, Default)]
pub struct CoordinatorReport {
    pub cycles: Vec<(PathBuf, CycleOutcome)>,
}

/// Run until `events` closes and no cycle is running or pending.
pub async fn run(vcs: Arc<dyn Vcs>, config: CoordinatorConfig, mut events: mpsc::Receiver<PathBuf>) -> CoordinatorReport {
    let (done_tx, mut done_rx) = mpsc::channel::<(PathBuf, CycleOutcome)>(1);
    let mut state = WatchState::Idle;
    let mut events_open = true;
    let mut report = CoordinatorReport::default();

    loop {
        tokio::select! {
            biased;

            maybe_path = events.recv(), if events_open => {
                if let Some(path) = maybe_path {
                    match state.on_change(path) {
                        Some(start) => spawn_cycle(&vcs, &config, start, done_tx.clone()),
                        None => debug!(?state, "cycle in flight; change coalesced"),
                    }
                } else {
                    events_open = false;
                    if state.is_idle() {
                        break;
                    }
                }
            }

            Some((path, outcome)) = done_rx.recv() => {
                report.cycles.push((path, outcome));
                if let Some(next) = state.on_complete() {
                    spawn_cycle(&vcs, &config, next, done_tx.clone());
                } else if !events_open {
                    break;
                }
            }
        }
    }

    info!(cycles = report.cycles.len(), "auto-commit coordinator stopped");
    report
}

fn spawn_cycle(
    vcs: &Arc<dyn Vcs>,
    config: &CoordinatorConfig,
    path: PathBuf,
    done_tx: mpsc::Sender<(PathBuf, CycleOutcome)>,
) {
    let vcs = Arc::clone(vcs);
    let message = commit_message(&config.message_prefix, &config.root, &path);
    info!(path = %path.display(), "starting auto-commit cycle");
    tokio::spawn(async move {
        let outcome = run_cycle(vcs.as_ref(), &path, &message).await;
        let _ = done_tx.send((path, outcome)).await;
    });
}

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod tests;
