//! Admin session state: a boolean flag plus the admin's profile.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::store::{KvStore, PrefsError, load_json, save_json};

pub const ADMIN_FLAG_KEY: &str = "isAdmin";
pub const ADMIN_PROFILE_KEY: &str = "adminProfile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub logged_in_at: OffsetDateTime,
}

pub struct AdminSession {
    store: Arc<dyn KvStore>,
}

impl AdminSession {
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Mark the session as admin and remember who logged in.
    pub fn login(&self, name: &str, email: &str) -> Result<AdminProfile, PrefsError> {
        let profile = AdminProfile {
            name: name.to_owned(),
            email: email.to_owned(),
            logged_in_at: OffsetDateTime::now_utc(),
        };
        self.store.set(ADMIN_FLAG_KEY, "true")?;
        save_json(self.store.as_ref(), ADMIN_PROFILE_KEY, &profile)?;
        Ok(profile)
    }

    pub fn logout(&self) -> Result<(), PrefsError> {
        self.store.remove(ADMIN_FLAG_KEY)?;
        self.store.remove(ADMIN_PROFILE_KEY)
    }

    /// Only the literal `"true"` counts as an admin session.
    pub fn is_admin(&self) -> Result<bool, PrefsError> {
        Ok(self.store.get(ADMIN_FLAG_KEY)?.as_deref() == Some("true"))
    }

    pub fn profile(&self) -> Result<Option<AdminProfile>, PrefsError> {
        load_json(self.store.as_ref(), ADMIN_PROFILE_KEY)
    }
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
