//! Polling change detector.
//!
//! Each poll walks the tree, stamps every file with `(mtime, len)` and diffs
//! against the previous walk. Added, modified and removed files are all
//! reported as changes. Directories whose name is in the ignore list are not
//! entered.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

pub const DEFAULT_IGNORES: &[&str] = &[".git", "target", "node_modules"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

pub struct Scanner {
    root: PathBuf,
    ignore: Vec<String>,
    snapshot: HashMap<PathBuf, FileStamp>,
}

impl Scanner {
    /// Take the baseline snapshot. Files present now are not reported.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be read.
    pub fn new(root: impl Into<PathBuf>, ignore: Vec<String>) -> io::Result<Self> {
        let root = root.into();
        let snapshot = walk(&root, &ignore)?;
        Ok(Self { root, ignore, snapshot })
    }

    /// Walk again and return every path that differs from the last walk.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be read.
    pub fn poll(&mut self) -> io::Result<Vec<PathBuf>> {
        let next = walk(&self.root, &self.ignore)?;
        let changes = diff(&self.snapshot, &next);
        self.snapshot = next;
        Ok(changes)
    }
}

/// Poll every `interval` and forward changes to `tx` until the receiver
/// goes away.
pub async fn watch(mut scanner: Scanner, interval: Duration, tx: mpsc::Sender<PathBuf>) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let polled = tokio::task::spawn_blocking(move || {
            let result = scanner.poll();
            (scanner, result)
        })
        .await;
        let changes = match polled {
            Ok((returned, Ok(changes))) => {
                scanner = returned;
                changes
            }
            Ok((returned, Err(e))) => {
                warn!(error = %e, root = %returned.root.display(), "scan failed; retrying next tick");
                scanner = returned;
                continue;
            }
            Err(e) => {
                warn!(error = %e, "scan task panicked; stopping watch");
                return;
            }
        };

        for path in changes {
            debug!(path = %path.display(), "change detected");
            if tx.send(path).await.is_err() {
                return;
            }
        }
    }
}

fn walk(root: &Path, ignore: &[String]) -> io::Result<HashMap<PathBuf, FileStamp>> {
    let mut out = HashMap::new();
    let mut stack = vec![root.to_path_buf()];
    let mut at_root = true;

    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            // EDGE: a subdirectory can vanish between listing and reading.
            Err(e) if !at_root && e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };
        at_root = false;

        for entry in entries.flatten() {
            let name = entry.file_name();
            if ignore.iter().any(|ig| name.as_os_str() == ig.as_str()) {
                continue;
            }
            let Ok(meta) = entry.metadata() else {
                continue;
            };
            let path = entry.path();
            if meta.is_dir() {
                stack.push(path);
            } else if meta.is_file() {
                out.insert(path, FileStamp { modified: meta.modified().ok(), len: meta.len() });
            }
        }
    }

    Ok(out)
}

fn diff(old: &HashMap<PathBuf, FileStamp>, new: &HashMap<PathBuf, FileStamp>) -> Vec<PathBuf> {
    let mut changes: Vec<PathBuf> = new
        .iter()
        .filter(|(path, stamp)| old.get(*path) != Some(*stamp))
        .map(|(path, _)| path.clone())
        .chain(old.keys().filter(|path| !new.contains_key(*path)).cloned())
        .collect();
    changes.sort();
    changes
}

#[cfg(test)]
#[path = "scan_test.rs"]
mod tests;
