//! Shared-top service: validation plus load → mutate → store flows.
//!
//! ERROR HANDLING
//! ==============
//! Mutations go through [`TopStore::modify`]. The local store applies them
//! under its write lock, so concurrent edits to one top all land. The hosted
//! store is last-writer-wins across clients.

use models::{Comment, ModelError, NewTop, SharedTop};
use serde::Deserialize;
use uuid::Uuid;

use crate::backend::{BackendError, TopStore};

#[derive(Debug, thiserror::Error)]
pub enum TopError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("shared top not found: {0}")]
    NotFound(Uuid),

    #[error("comment not found: {0}")]
    CommentNotFound(Uuid),

    #[error(transparent)]
    Backend(BackendError),
}

impl From<BackendError> for TopError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Missing(id) => Self::NotFound(id),
            BackendError::Model(ModelError::CommentNotFound(id)) => Self::CommentNotFound(id),
            other => Self::Backend(other),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewComment {
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<Uuid>,
}

pub async fn list(store: &dyn TopStore, category: Option<&str>) -> Result<Vec<SharedTop>, TopError> {
    Ok(store.list(category).await?)
}

pub async fn get(store: &dyn TopStore, id: Uuid) -> Result<SharedTop, TopError> {
    store.get(id).await?.ok_or(TopError::NotFound(id))
}

pub async fn create(store: &dyn TopStore, new: NewTop) -> Result<SharedTop, TopError> {
    if new.title.trim().is_empty() {
        return Err(TopError::Validation("title must not be empty"));
    }
    if new.user_id.trim().is_empty() {
        return Err(TopError::Validation("user_id must not be empty"));
    }
    Ok(store.insert(SharedTop::new(new)).await?)
}

pub async fn toggle_like(store: &dyn TopStore, id: Uuid) -> Result<SharedTop, TopError> {
    mutate(store, id, |top| {
        top.toggle_like();
        Ok(())
    })
    .await
}

pub async fn share(store: &dyn TopStore, id: Uuid) -> Result<SharedTop, TopError> {
    mutate(store, id, |top| {
        top.record_share();
        Ok(())
    })
    .await
}

/// Add a comment, or a reply when `parent_id` names a top-level comment.
pub async fn comment(store: &dyn TopStore, id: Uuid, new: NewComment) -> Result<SharedTop, TopError> {
    if new.content.trim().is_empty() {
        return Err(TopError::Validation("content must not be empty"));
    }
    let parent_id = new.parent_id;
    let comment = Comment::new(new.user_id, new.user_name, new.content);
    mutate(store, id, move |top| match parent_id {
        Some(parent_id) => top.add_reply(parent_id, comment),
        None => {
            top.add_comment(comment);
            Ok(())
        }
    })
    .await
}

pub async fn toggle_comment_like(store: &dyn TopStore, id: Uuid, comment_id: Uuid) -> Result<SharedTop, TopError> {
    mutate(store, id, move |top| top.toggle_comment_like(comment_id)).await
}

async fn mutate<F>(store: &dyn TopStore, id: Uuid, apply: F) -> Result<SharedTop, TopError>
where
    F: FnOnce(&mut SharedTop) -> Result<(), ModelError> + Send + 'static,
{
    Ok(store.modify(id, Box::new(apply)).await?)
}

#[cfg(test)]
#[path = "tops_test.rs"]
mod tests;
