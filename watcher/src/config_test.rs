use super::*;

fn parse(args: &[&str]) -> WatchArgs {
    WatchArgs::try_parse_from(std::iter::once("autocommit").chain(args.iter().copied())).unwrap()
}

#[test]
fn defaults() {
    let args = parse(&[]);
    assert_eq!(args.root, PathBuf::from("."));
    assert_eq!(args.poll_interval(), Duration::from_millis(500));
    assert_eq!(args.ignore_list(), vec![".git", "target", "node_modules"]);
    assert_eq!(args.push_target(), PushTarget::Upstream);
    assert_eq!(args.coordinator_config().message_prefix, "auto-commit");
}

#[test]
fn explicit_push_target() {
    let args = parse(&["--remote", "origin", "--branch", "main"]);
    assert_eq!(args.push_target(), PushTarget::Explicit { remote: "origin".into(), branch: "main".into() });
}

#[test]
fn remote_without_branch_is_rejected() {
    let result = WatchArgs::try_parse_from(["autocommit", "--remote", "origin"]);
    assert!(result.is_err());
}

#[test]
fn no_push_wins_over_target() {
    let args = parse(&["--remote", "origin", "--branch", "main", "--no-push"]);
    assert_eq!(args.push_target(), PushTarget::Disabled);
}

#[test]
fn ignore_list_extends_defaults() {
    let args = parse(&["--ignore", "dist,.cache", "--ignore", "tmp"]);
    assert_eq!(args.ignore_list(), vec![".git", "target", "node_modules", "dist", ".cache", "tmp"]);
}

#[test]
fn git_dir_stays_ignored_when_named_again() {
    let args = parse(&["--ignore", ".git,dist"]);
    let list = args.ignore_list();
    assert_eq!(list.iter().filter(|n| *n == ".git").count(), 1);
    assert!(list.contains(&"dist".to_owned()));
}

#[test]
fn zero_poll_interval_is_clamped() {
    let args = parse(&["--poll-ms", "0"]);
    assert_eq!(args.poll_interval(), Duration::from_millis(1));
}
