//! Shared-top persistence with an explicit hosted/local capability.
//!
//! ARCHITECTURE
//! ============
//! At startup [`connect`] validates the hosted backend settings once and
//! picks a [`TopStore`]: the hosted REST backend when configuration is
//! valid, otherwise the local key-value store. The chosen [`BackendMode`] is
//! kept in application state so callers can report which one is active.
//!
//! TRADE-OFFS
//! ==========
//! Misconfiguration is not fatal. It is logged and the app degrades to the
//! local store, which keeps the app usable offline at the cost of data that
//! never leaves this machine.

pub mod config;
pub mod hosted;
pub mod local;

use std::path::Path;
use std::sync::Arc;

use models::{ModelError, SharedTop};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

pub use config::BackendConfig;
pub use hosted::HostedTopStore;
pub use local::LocalTopStore;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("hosted backend not configured: {0} not set")]
    NotConfigured(&'static str),

    #[error("invalid hosted backend URL: {0}")]
    InvalidUrl(String),

    #[error("hosted backend key is a placeholder")]
    PlaceholderKey,

    #[error("backend request failed: {0}")]
    Request(String),

    #[error("backend returned status {status}")]
    Status { status: u16, body: String },

    #[error("backend response parse failed: {0}")]
    Parse(String),

    #[error("shared top not found: {0}")]
    Missing(Uuid),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("local store failed: {0}")]
    Local(#[from] prefs::PrefsError),

    #[error("local store task failed: {0}")]
    Blocking(String),
}

/// Which persistence backend is serving shared tops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendMode {
    Hosted,
    Local,
}

/// Edit applied to one stored top by [`TopStore::modify`].
pub type TopEdit = Box<dyn FnOnce(&mut SharedTop) -> Result<(), ModelError> + Send>;

/// Storage for shared tops.
#[async_trait::async_trait]
pub trait TopStore: Send + Sync {
    /// All tops, newest first, optionally limited to one category.
    async fn list(&self, category: Option<&str>) -> Result<Vec<SharedTop>, BackendError>;

    async fn get(&self, id: Uuid) -> Result<Option<SharedTop>, BackendError>;

    async fn insert(&self, top: SharedTop) -> Result<SharedTop, BackendError>;

    /// Replace a stored top. Fails with [`BackendError::Missing`] if absent.
    async fn update(&self, top: SharedTop) -> Result<SharedTop, BackendError>;

    /// Load the top `id`, apply `edit` and store the result. Nothing is
    /// written when `edit` fails.
    async fn modify(&self, id: Uuid, edit: TopEdit) -> Result<SharedTop, BackendError>;
}

/// Pick the backend from environment configuration.
#[must_use]
pub fn connect(local_store_path: &Path) -> (BackendMode, Arc<dyn TopStore>) {
    let hosted = BackendConfig::from_env().and_then(HostedTopStore::new);
    select(hosted, local_store_path)
}

fn select(
    hosted: Result<HostedTopStore, BackendError>,
    local_store_path: &Path,
) -> (BackendMode, Arc<dyn TopStore>) {
    match hosted {
        Ok(store) => {
            info!(table = %store.table_url(), "hosted backend configured");
            (BackendMode::Hosted, Arc::new(store))
        }
        Err(e) => {
            warn!(error = %e, path = %local_store_path.display(), "hosted backend unavailable; using local store");
            let kv = Arc::new(prefs::FileStore::new(local_store_path));
            (BackendMode::Local, Arc::new(LocalTopStore::new(kv)))
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
