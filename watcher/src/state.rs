//! Coalescing state machine for the auto-commit cycle.
//!
//! At most one cycle is in flight. Changes seen while busy only replace the
//! pending path; completion starts exactly one follow-up cycle for it.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WatchState {
    #[default]
    Idle,
    Busy,
    /// A cycle is running and at least one change arrived since it started.
    BusyWithPending(PathBuf),
}

impl WatchState {
    /// Apply a change event. Returns the path to start a cycle for, if any.
    pub fn on_change(&mut self, path: PathBuf) -> Option<PathBuf> {
        match self {
            Self::Idle => {
                *self = Self::Busy;
                Some(path)
            }
            Self::Busy | Self::BusyWithPending(_) => {
                // Last write wins.
                *self = Self::BusyWithPending(path);
                None
            }
        }
    }

    /// Apply a cycle completion. Returns the pending path to start next, if any.
    pub fn on_complete(&mut self) -> Option<PathBuf> {
        match std::mem::take(self) {
            Self::BusyWithPending(path) => {
                *self = Self::Busy;
                Some(path)
            }
            Self::Busy | Self::Idle => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
