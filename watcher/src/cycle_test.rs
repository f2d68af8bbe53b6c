use std::path::PathBuf;

use super::*;
use crate::vcs::test_helpers::{Call, RecordingVcs};

#[test]
fn commit_message_is_relative_to_root() {
    let msg = commit_message("auto-commit", Path::new("/repo"), Path::new("/repo/src/main.rs"));
    assert_eq!(msg, "auto-commit: src/main.rs");
}

#[test]
fn commit_message_keeps_paths_outside_root() {
    let msg = commit_message("wip", Path::new("/repo"), Path::new("/elsewhere/a.txt"));
    assert_eq!(msg, "wip: /elsewhere/a.txt");
}

#[tokio::test]
async fn full_chain_stages_commits_and_pushes() {
    let vcs = RecordingVcs::default();
    let outcome = run_cycle(&vcs, Path::new("a.txt"), "auto-commit: a.txt").await;

    assert_eq!(outcome, CycleOutcome::Pushed);
    assert_eq!(
        vcs.calls(),
        vec![Call::Stage(PathBuf::from("a.txt")), Call::Commit("auto-commit: a.txt".into()), Call::Push]
    );
}

#[tokio::test]
async fn nothing_to_commit_never_pushes() {
    let vcs = RecordingVcs { nothing_to_commit: true, ..RecordingVcs::default() };
    let outcome = run_cycle(&vcs, Path::new("a.txt"), "m").await;

    assert_eq!(outcome, CycleOutcome::NothingToCommit);
    assert!(!vcs.calls().contains(&Call::Push));
}

#[tokio::test]
async fn stage_failure_short_circuits() {
    let vcs = RecordingVcs { fail_step: Some("stage"), ..RecordingVcs::default() };
    let outcome = run_cycle(&vcs, Path::new("a.txt"), "m").await;

    assert!(matches!(outcome, CycleOutcome::Failed { step: "stage", .. }));
    assert_eq!(vcs.calls(), vec![Call::Stage(PathBuf::from("a.txt"))]);
}

#[tokio::test]
async fn commit_failure_skips_push() {
    let vcs = RecordingVcs { fail_step: Some("commit"), ..RecordingVcs::default() };
    let outcome = run_cycle(&vcs, Path::new("a.txt"), "m").await;

    assert!(matches!(outcome, CycleOutcome::Failed { step: "commit", .. }));
    assert!(!vcs.calls().contains(&Call::Push));
}

#[tokio::test]
async fn push_failure_is_reported() {
    let vcs = RecordingVcs { fail_step: Some("push"), ..RecordingVcs::default() };
    let outcome = run_cycle(&vcs, Path::new("a.txt"), "m").await;

    match outcome {
        CycleOutcome::Failed { step, reason } => {
            assert_eq!(step, "push");
            assert!(reason.contains("push refused"));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
