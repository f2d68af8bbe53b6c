//! Local fallback store: all shared tops as one JSON array in a key-value store.
//!
//! Store calls are synchronous file IO, so each operation runs on the
//! blocking pool. Writes hold `write_lock` across load, change and save.

use std::sync::Arc;

use models::SharedTop;
use prefs::{KvStore, save_json};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{BackendError, TopEdit, TopStore};

pub const TOPS_KEY: &str = "sharedTops";

pub struct LocalTopStore {
    kv: Arc<dyn KvStore>,
    /// Serializes read-modify-write cycles on the tops key.
    write_lock: Mutex<()>,
}

impl LocalTopStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv, write_lock: Mutex::new(()) }
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T, BackendError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn KvStore) -> Result<T, BackendError> + Send + 'static,
    {
        let kv = Arc::clone(&self.kv);
        tokio::task::spawn_blocking(move || op(kv.as_ref()))
            .await
            .map_err(|e| BackendError::Blocking(e.to_string()))?
    }
}

/// Read every stored top. An unparseable value is an error, never an empty
/// list, so a later save cannot overwrite it.
fn load(kv: &dyn KvStore) -> Result<Vec<SharedTop>, BackendError> {
    let Some(raw) = kv.get(TOPS_KEY)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|e| BackendError::Parse(format!("{TOPS_KEY}: {e}")))
}

fn save(kv: &dyn KvStore, tops: &[SharedTop]) -> Result<(), BackendError> {
    Ok(save_json(kv, TOPS_KEY, &tops)?)
}

#[async_trait::async_trait]
impl TopStore for LocalTopStore {
    async fn list(&self, category: Option<&str>) -> Result<Vec<SharedTop>, BackendError> {
        let category = category.map(str::to_owned);
        self.blocking(move |kv| {
            let mut tops: Vec<SharedTop> = load(kv)?
                .into_iter()
                .filter(|t| category.as_deref().is_none_or(|c| t.category == c))
                .collect();
            tops.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(tops)
        })
        .await
    }

    async fn get(&self, id: Uuid) -> Result<Option<SharedTop>, BackendError> {
        self.blocking(move |kv| Ok(load(kv)?.into_iter().find(|t| t.id == id)))
            .await
    }

    async fn insert(&self, top: SharedTop) -> Result<SharedTop, BackendError> {
        let _guard = self.write_lock.lock().await;
        self.blocking(move |kv| {
            let mut tops = load(kv)?;
            tops.push(top.clone());
            save(kv, &tops)?;
            Ok(top)
        })
        .await
    }

    async fn update(&self, top: SharedTop) -> Result<SharedTop, BackendError> {
        let _guard = self.write_lock.lock().await;
        self.blocking(move |kv| {
            let mut tops = load(kv)?;
            let slot = tops
                .iter_mut()
                .find(|t| t.id == top.id)
                .ok_or(BackendError::Missing(top.id))?;
            *slot = top.clone();
            save(kv, &tops)?;
            Ok(top)
        })
        .await
    }

    async fn modify(&self, id: Uuid, edit: TopEdit) -> Result<SharedTop, BackendError> {
        let _guard = self.write_lock.lock().await;
        self.blocking(move |kv| {
            let mut tops = load(kv)?;
            let slot = tops
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(BackendError::Missing(id))?;
            edit(slot)?;
            let edited = slot.clone();
            save(kv, &tops)?;
            Ok(edited)
        })
        .await
    }
}

#[cfg(test)]
#[path = "local_test.rs"]
mod tests;
