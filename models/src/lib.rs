//! Shared data model for players, shared tops and their comments.
//!
//! This crate owns the JSON representation used by the server, the local
//! fallback store and the CLI. Records carry no invariants beyond their
//! shape; the mutation helpers below are the local state updates the app
//! applies before persisting a top.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Error returned by comment mutations on a [`SharedTop`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    /// No comment (or reply, for like toggles) with this id exists on the top.
    #[error("comment not found: {0}")]
    CommentNotFound(Uuid),
}

// =============================================================================
// PLAYER
// =============================================================================

/// A football player as shown on cards and inside ranked tops.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub name: String,
    pub photo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
}

// =============================================================================
// COMMENT
// =============================================================================

/// A comment on a shared top. Replies nest one level deep.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub content: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<Comment>,
}

impl Comment {
    /// Build a fresh comment authored now.
    #[must_use]
    pub fn new(user_id: impl Into<String>, user_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            content: content.into(),
            likes: 0,
            is_liked: false,
            created_at: OffsetDateTime::now_utc(),
            replies: Vec::new(),
        }
    }

    fn toggle_like(&mut self) {
        self.is_liked = !self.is_liked;
        self.likes = bump(self.likes, self.is_liked);
    }
}

// =============================================================================
// SHARED TOP
// =============================================================================

/// Caller-supplied fields for a new shared top.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewTop {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub players: Vec<Player>,
}

/// A user's ranked player list, published for others to like and discuss.
///
/// Rank is the position in `players`, first entry is rank 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedTop {
    pub id: Uuid,
    pub user_id: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_avatar: Option<String>,
    pub title: String,
    #[serde(default)]
    pub players: Vec<Player>,
    pub category: String,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub shares: u32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub comment_count: u32,
}

impl SharedTop {
    #[must_use]
    pub fn new(new: NewTop) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            user_name: new.user_name,
            user_avatar: new.user_avatar,
            title: new.title,
            players: new.players,
            category: new.category,
            likes: 0,
            shares: 0,
            created_at: OffsetDateTime::now_utc(),
            is_liked: false,
            comments: Vec::new(),
            comment_count: 0,
        }
    }

    /// Players paired with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &Player)> {
        self.players.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    /// Flip the viewer's like; the counter follows, never dropping below zero.
    pub fn toggle_like(&mut self) {
        self.is_liked = !self.is_liked;
        self.likes = bump(self.likes, self.is_liked);
    }

    pub fn record_share(&mut self) {
        self.shares = self.shares.saturating_add(1);
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
        self.recount();
    }

    /// Attach `reply` under the top-level comment `parent_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CommentNotFound`] when `parent_id` is not a
    /// top-level comment. Replies to replies are rejected this way.
    pub fn add_reply(&mut self, parent_id: Uuid, mut reply: Comment) -> Result<(), ModelError> {
        let parent = self
            .comments
            .iter_mut()
            .find(|c| c.id == parent_id)
            .ok_or(ModelError::CommentNotFound(parent_id))?;
        // EDGE: one level only, a reply never carries its own replies.
        reply.replies.clear();
        parent.replies.push(reply);
        self.recount();
        Ok(())
    }

    /// Flip the viewer's like on a comment or a reply.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::CommentNotFound`] if no comment or reply matches.
    pub fn toggle_comment_like(&mut self, comment_id: Uuid) -> Result<(), ModelError> {
        if let Some(comment) = self.comments.iter_mut().find(|c| c.id == comment_id) {
            comment.toggle_like();
            return Ok(());
        }

        let reply = self
            .comments
            .iter_mut()
            .flat_map(|c| c.replies.iter_mut())
            .find(|r| r.id == comment_id)
            .ok_or(ModelError::CommentNotFound(comment_id))?;
        reply.toggle_like();
        Ok(())
    }

    fn recount(&mut self) {
        let total: usize = self.comments.iter().map(|c| 1 + c.replies.len()).sum();
        self.comment_count = u32::try_from(total).unwrap_or(u32::MAX);
    }
}

fn bump(count: u32, up: bool) -> u32 {
    if up { count.saturating_add(1) } else { count.saturating_sub(1) }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
