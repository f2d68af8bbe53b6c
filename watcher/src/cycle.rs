//! One stage → commit → push chain.
//!
//! ERROR HANDLING
//! ==============
//! A failing step ends the chain early. The failure is reported in the
//! returned [`CycleOutcome`] and logged, but the coordinator treats every
//! outcome the same way: no retry, the next change starts a fresh chain.

use std::path::Path;

use tracing::{info, warn};

use crate::vcs::{CommitOutcome, Vcs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Pushed,
    /// Commit reported an empty diff; push skipped.
    NothingToCommit,
    Failed { step: &'static str, reason: String },
}

/// Commit message for a change: `<prefix>: <path relative to root>`.
#[must_use]
pub fn commit_message(prefix: &str, root: &Path, path: &Path) -> String {
    let shown = path.strip_prefix(root).unwrap_or(path);
    format!("{prefix}: {}", shown.display())
}

/// Run the chain for `path`. Never returns an error; see [`CycleOutcome`].
pub async fn run_cycle(vcs: &dyn Vcs, path: &Path, message: &str) -> CycleOutcome {
    if let Err(e) = vcs.stage(path).await {
        return failed("stage", &e, path);
    }

    match vcs.commit(message).await {
        Ok(CommitOutcome::Committed) => {}
        Ok(CommitOutcome::NothingToCommit) => {
            info!(path = %path.display(), "nothing to commit");
            return CycleOutcome::NothingToCommit;
        }
        Err(e) => return failed("commit", &e, path),
    }

    if let Err(e) = vcs.push().await {
        return failed("push", &e, path);
    }

    info!(path = %path.display(), message, "committed and pushed");
    CycleOutcome::Pushed
}

fn failed(step: &'static str, error: &dyn std::fmt::Display, path: &Path) -> CycleOutcome {
    warn!(step, error = %error, path = %path.display(), "auto-commit step failed; waiting for next change");
    CycleOutcome::Failed { step, reason: error.to_string() }
}

#[cfg(test)]
#[path = "cycle_test.rs"]
mod tests;
