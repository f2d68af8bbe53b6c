//! Command line and environment configuration for the `autocommit` binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::coordinator::CoordinatorConfig;
use crate::scan::DEFAULT_IGNORES;
use crate::vcs::PushTarget;

#[derive(Parser, Debug, Clone)]
#[command(name = "autocommit", about = "Stage, commit and push every change under a directory")]
pub struct WatchArgs {
    /// Directory to watch; also the git working directory.
    #[arg(long, env = "AUTOCOMMIT_ROOT", default_value = ".")]
    pub root: PathBuf,

    #[arg(long, env = "AUTOCOMMIT_POLL_MS", default_value_t = 500)]
    pub poll_ms: u64,

    /// Extra directory names never entered, on top of the defaults.
    #[arg(long = "ignore", env = "AUTOCOMMIT_IGNORE", value_delimiter = ',')]
    pub ignore: Vec<String>,

    #[arg(long, env = "AUTOCOMMIT_REMOTE", requires = "branch")]
    pub remote: Option<String>,

    #[arg(long, env = "AUTOCOMMIT_BRANCH", requires = "remote")]
    pub branch: Option<String>,

    #[arg(long, env = "AUTOCOMMIT_NO_PUSH", default_value_t = false)]
    pub no_push: bool,

    #[arg(long, env = "AUTOCOMMIT_MESSAGE_PREFIX", default_value = "auto-commit")]
    pub message_prefix: String,
}

impl WatchArgs {
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms.max(1))
    }

    #[must_use]
    pub fn ignore_list(&self) -> Vec<String> {
        let mut list: Vec<String> = DEFAULT_IGNORES.iter().map(|s| (*s).to_owned()).collect();
        for name in &self.ignore {
            if !list.contains(name) {
                list.push(name.clone());
            }
        }
        list
    }

    #[must_use]
    pub fn push_target(&self) -> PushTarget {
        if self.no_push {
            return PushTarget::Disabled;
        }
        match (&self.remote, &self.branch) {
            (Some(remote), Some(branch)) => PushTarget::Explicit { remote: remote.clone(), branch: branch.clone() },
            _ => PushTarget::Upstream,
        }
    }

    #[must_use]
    pub fn coordinator_config(&self) -> CoordinatorConfig {
        CoordinatorConfig { root: self.root.clone(), message_prefix: self.message_prefix.clone() }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
