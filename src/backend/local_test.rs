use models::{ModelError, NewTop};
use prefs::MemoryStore;
use time::Duration;

use super::*;

fn top(category: &str, title: &str) -> SharedTop {
    SharedTop::new(NewTop {
        user_id: "u1".into(),
        user_name: "Ana".into(),
        user_avatar: None,
        title: title.into(),
        category: category.into(),
        players: Vec::new(),
    })
}

fn store() -> LocalTopStore {
    LocalTopStore::new(Arc::new(MemoryStore::new()))
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    assert!(store().list(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_newest_first_and_filters_category() {
    let store = store();
    let mut old = top("forwards", "old");
    old.created_at -= Duration::hours(1);
    store.insert(old).await.unwrap();
    store.insert(top("forwards", "new")).await.unwrap();
    store.insert(top("keepers", "gk")).await.unwrap();

    let forwards = store.list(Some("forwards")).await.unwrap();
    let titles: Vec<&str> = forwards.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["new", "old"]);
    assert_eq!(store.list(None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn update_replaces_in_place() {
    let store = store();
    let mut stored = store.insert(top("forwards", "t")).await.unwrap();
    stored.toggle_like();
    store.update(stored.clone()).await.unwrap();

    let fetched = store.get(stored.id).await.unwrap().unwrap();
    assert_eq!(fetched.likes, 1);
    assert!(fetched.is_liked);
}

#[tokio::test]
async fn update_unknown_is_missing() {
    let store = store();
    let ghost = top("forwards", "ghost");
    let err = store.update(ghost.clone()).await.unwrap_err();
    assert!(matches!(err, BackendError::Missing(id) if id == ghost.id));
}

#[tokio::test]
async fn unparseable_tops_are_an_error_and_left_intact() {
    let kv = Arc::new(MemoryStore::new());
    let bad = r#"[{"id":"00000000-0000-0000-0000-000000000001","title":"old"}]"#;
    kv.set(TOPS_KEY, bad).unwrap();
    let store = LocalTopStore::new(kv.clone());

    assert!(matches!(store.list(None).await.unwrap_err(), BackendError::Parse(_)));
    assert!(matches!(store.insert(top("forwards", "new")).await.unwrap_err(), BackendError::Parse(_)));
    assert_eq!(kv.get(TOPS_KEY).unwrap().as_deref(), Some(bad));
}

#[tokio::test]
async fn modify_applies_edit_and_persists() {
    let store = store();
    let stored = store.insert(top("forwards", "t")).await.unwrap();

    let edited = store
        .modify(stored.id, Box::new(|t: &mut SharedTop| {
            t.record_share();
            Ok(())
        }))
        .await
        .unwrap();
    assert_eq!(edited.shares, 1);
    assert_eq!(store.get(stored.id).await.unwrap().unwrap().shares, 1);
}

#[tokio::test]
async fn failed_edit_writes_nothing() {
    let store = store();
    let stored = store.insert(top("forwards", "t")).await.unwrap();

    let err = store
        .modify(stored.id, Box::new(|t: &mut SharedTop| {
            t.record_share();
            Err(ModelError::CommentNotFound(Uuid::nil()))
        }))
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Model(_)));
    assert_eq!(store.get(stored.id).await.unwrap().unwrap().shares, 0);
}

#[tokio::test]
async fn modify_unknown_is_missing() {
    let err = store()
        .modify(Uuid::nil(), Box::new(|_: &mut SharedTop| Ok(())))
        .await
        .unwrap_err();
    assert!(matches!(err, BackendError::Missing(_)));
}
