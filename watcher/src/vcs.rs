//! Version-control adapter.
//!
//! The [`Vcs`] trait is the seam between the cycle logic and the external
//! tool. [`GitCli`] shells out to `git` with `tokio::process` so the
//! coordinator task never blocks on the child.

use std::path::{Path, PathBuf};
use std::process::Output;

use tokio::process::Command;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    #[error("failed to spawn {program}: {source}")]
    Spawn { program: String, source: std::io::Error },

    #[error("git {step} exited with {code:?}: {detail}")]
    Failed { step: &'static str, code: Option<i32>, detail: String },
}

/// Result of a commit attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    /// The tool reported an empty diff. Counts as success; nothing to push.
    NothingToCommit,
}

#[async_trait::async_trait]
pub trait Vcs: Send + Sync {
    /// Stage the working tree. `path` is the change that triggered the cycle.
    async fn stage(&self, path: &Path) -> Result<(), VcsError>;

    async fn commit(&self, message: &str) -> Result<CommitOutcome, VcsError>;

    async fn push(&self) -> Result<(), VcsError>;
}

// =============================================================================
// GIT CLI
// =============================================================================

/// Where `git push` sends commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushTarget {
    /// Plain `git push`, relying on the branch's upstream.
    Upstream,
    Explicit { remote: String, branch: String },
    /// Never push; commits stay local.
    Disabled,
}

pub struct GitCli {
    root: PathBuf,
    push_target: PushTarget,
}

impl GitCli {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, push_target: PushTarget) -> Self {
        Self { root: root.into(), push_target }
    }

    async fn git(&self, args: &[&str]) -> Result<Output, VcsError> {
        debug!(?args, root = %self.root.display(), "running git");
        // Output is matched against English text.
        Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .env("LC_ALL", "C")
            .output()
            .await
            .map_err(|source| VcsError::Spawn { program: "git".into(), source })
    }
}

#[async_trait::async_trait]
impl Vcs for GitCli {
    async fn stage(&self, _path: &Path) -> Result<(), VcsError> {
        let output = self.git(&["add", "-A"]).await?;
        check_status("add", &output)
    }

    async fn commit(&self, message: &str) -> Result<CommitOutcome, VcsError> {
        let output = self.git(&["commit", "-m", message]).await?;
        classify_commit(output.status.success(), output.status.code(), &output.stdout, &output.stderr)
    }

    async fn push(&self) -> Result<(), VcsError> {
        let output = match &self.push_target {
            PushTarget::Disabled => {
                debug!("push disabled; keeping commit local");
                return Ok(());
            }
            PushTarget::Upstream => self.git(&["push"]).await?,
            PushTarget::Explicit { remote, branch } => self.git(&["push", remote.as_str(), branch.as_str()]).await?,
        };
        check_status("push", &output)
    }
}

fn check_status(step: &'static str, output: &Output) -> Result<(), VcsError> {
    if output.status.success() {
        return Ok(());
    }
    Err(VcsError::Failed { step, code: output.status.code(), detail: detail(&output.stdout, &output.stderr) })
}

/// Interpret `git commit` output. An empty diff exits non-zero but is not a
/// failure.
pub(crate) fn classify_commit(
    success: bool,
    code: Option<i32>,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<CommitOutcome, VcsError> {
    if success {
        return Ok(CommitOutcome::Committed);
    }
    let text = detail(stdout, stderr);
    if text.contains("nothing to commit") || text.contains("no changes added to commit") {
        return Ok(CommitOutcome::NothingToCommit);
    }
    Err(VcsError::Failed { step: "commit", code, detail: text })
}

fn detail(stdout: &[u8], stderr: &[u8]) -> String {
    let out = String::from_utf8_lossy(stdout);
    let err = String::from_utf8_lossy(stderr);
    format!("{} {}", out.trim(), err.trim()).trim().to_owned()
}


#[cfg(test)]
#[path = "vcs_test.rs"]
mod tests;
