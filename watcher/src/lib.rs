//! Auto-commit watcher: stage, commit and push every file change, one
//! chain at a time.
//!
//! ARCHITECTURE
//! ============
//! `scan` polls the tree and emits changed paths. `coordinator` owns the
//! [`state::WatchState`] machine and starts at most one `cycle` (stage →
//! commit → push through a [`vcs::Vcs`]) at a time. Changes arriving while a
//! cycle runs collapse into a single follow-up cycle for the newest path.

pub mod config;
pub mod coordinator;
pub mod cycle;
pub mod scan;
pub mod state;
pub mod vcs;
