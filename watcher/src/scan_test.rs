use super::*;

fn ignores() -> Vec<String> {
    DEFAULT_IGNORES.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn baseline_files_are_not_reported() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    let mut scanner = Scanner::new(dir.path(), ignores()).unwrap();
    assert!(scanner.poll().unwrap().is_empty());
}

#[test]
fn detects_added_modified_and_removed() {
    let dir = tempfile::tempdir().unwrap();
    let keep = dir.path().join("keep.txt");
    let gone = dir.path().join("gone.txt");
    fs::write(&keep, "1").unwrap();
    fs::write(&gone, "x").unwrap();
    let mut scanner = Scanner::new(dir.path(), ignores()).unwrap();

    fs::create_dir(dir.path().join("src")).unwrap();
    let added = dir.path().join("src/new.rs");
    fs::write(&added, "fn main() {}").unwrap();
    fs::write(&keep, "longer contents").unwrap();
    fs::remove_file(&gone).unwrap();

    let mut expected = vec![added, gone, keep];
    expected.sort();
    assert_eq!(scanner.poll().unwrap(), expected);
    assert!(scanner.poll().unwrap().is_empty());
}

#[test]
fn ignored_directories_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let mut scanner = Scanner::new(dir.path(), ignores()).unwrap();

    for ignored in ["node_modules", ".git", "target"] {
        fs::create_dir_all(dir.path().join(ignored)).unwrap();
        fs::write(dir.path().join(ignored).join("f"), "x").unwrap();
    }

    assert!(scanner.poll().unwrap().is_empty());
}

#[test]
fn missing_root_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Scanner::new(dir.path().join("absent"), ignores()).is_err());
}

#[tokio::test]
async fn watch_forwards_changes() {
    let dir = tempfile::tempdir().unwrap();
    let scanner = Scanner::new(dir.path(), ignores()).unwrap();
    let (tx, mut rx) = mpsc::channel(8);
    let task = tokio::spawn(watch(scanner, Duration::from_millis(10), tx));

    let file = dir.path().join("fresh.txt");
    fs::write(&file, "hello").unwrap();

    let got = tokio::time::timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
    assert_eq!(got, Some(file));
    task.abort();
}
