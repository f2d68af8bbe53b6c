use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
    store.remove("k").unwrap();
}

#[test]
fn file_store_missing_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nope.json"));
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn file_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/dir/store.json");

    FileStore::new(&path).set("isAdmin", "true").unwrap();
    FileStore::new(&path).set("theme", "dark").unwrap();

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get("isAdmin").unwrap().as_deref(), Some("true"));
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn file_store_rejects_non_object_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = FileStore::new(&path).get("k").unwrap_err();
    assert!(matches!(err, PrefsError::Corrupt { .. }));
}

#[test]
fn load_json_ignores_garbage_values() {
    let store = MemoryStore::new();
    store.set("profile", "{not json").unwrap();
    let loaded: Option<serde_json::Value> = load_json(&store, "profile").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn save_then_load_json() {
    let store = MemoryStore::new();
    save_json(&store, "list", &vec![1, 2, 3]).unwrap();
    let loaded: Option<Vec<i32>> = load_json(&store, "list").unwrap();
    assert_eq!(loaded, Some(vec![1, 2, 3]));
}
