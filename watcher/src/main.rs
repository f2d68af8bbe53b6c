use std::sync::Arc;

use clap::Parser;
use tokio::sync::mpsc;
use tracing::info;
use watcher::config::WatchArgs;
use watcher::coordinator;
use watcher::scan::{self, Scanner};
use watcher::vcs::{GitCli, Vcs};

const EVENT_QUEUE_CAPACITY: usize = 256;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    let args = WatchArgs::parse();

    let scanner = Scanner::new(&args.root, args.ignore_list())?;
    let vcs: Arc<dyn Vcs> = Arc::new(GitCli::new(&args.root, args.push_target()));
    let (tx, rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);

    info!(
        root = %args.root.display(),
        poll_ms = args.poll_ms,
        push = ?args.push_target(),
        "autocommit watching"
    );
    tokio::spawn(scan::watch(scanner, args.poll_interval(), tx));

    tokio::select! {
        report = coordinator::run(vcs, args.coordinator_config(), rx) => {
            info!(cycles = report.cycles.len(), "watch ended");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted; exiting");
        }
    }
    Ok(())
}
