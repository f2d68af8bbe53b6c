//! Feature flags: named boolean toggles controlling which app sections show.
//!
//! All flags live under one key as a JSON object of `name -> bool`. Flags
//! that were never written fall back to [`DEFAULT_FLAGS`], and names outside
//! that table read as `false`.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::store::{KvStore, PrefsError, load_json, save_json};

pub const FLAGS_KEY: &str = "featureFlags";

/// Known flags and their defaults.
pub const DEFAULT_FLAGS: &[(&str, bool)] = &[
    ("chat", true),
    ("sharedTops", true),
    ("comments", true),
    ("swipeRanking", true),
    ("adminPanel", false),
];

pub struct FeatureFlags {
    store: Arc<dyn KvStore>,
}

impl FeatureFlags {
    #[must_use]
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Read one flag.
    pub fn get(&self, name: &str) -> Result<bool, PrefsError> {
        let stored = self.stored()?;
        Ok(stored.get(name).copied().unwrap_or_else(|| default_for(name)))
    }

    /// Write one flag, leaving every other stored flag untouched.
    pub fn set(&self, name: &str, enabled: bool) -> Result<(), PrefsError> {
        let mut stored = self.stored()?;
        stored.insert(name.to_owned(), enabled);
        save_json(self.store.as_ref(), FLAGS_KEY, &stored)
    }

    /// Flip one flag and return the new value.
    pub fn toggle(&self, name: &str) -> Result<bool, PrefsError> {
        let next = !self.get(name)?;
        self.set(name, next)?;
        Ok(next)
    }

    /// Effective value of every known or stored flag.
    pub fn all(&self) -> Result<BTreeMap<String, bool>, PrefsError> {
        let mut merged: BTreeMap<String, bool> =
            DEFAULT_FLAGS.iter().map(|(name, on)| ((*name).to_owned(), *on)).collect();
        merged.extend(self.stored()?);
        Ok(merged)
    }

    /// Drop every stored override so defaults apply again.
    pub fn reset(&self) -> Result<(), PrefsError> {
        self.store.remove(FLAGS_KEY)
    }

    fn stored(&self) -> Result<BTreeMap<String, bool>, PrefsError> {
        Ok(load_json(self.store.as_ref(), FLAGS_KEY)?.unwrap_or_default())
    }
}

fn default_for(name: &str) -> bool {
    DEFAULT_FLAGS
        .iter()
        .find(|(known, _)| *known == name)
        .is_some_and(|(_, on)| *on)
}

#[cfg(test)]
#[path = "flags_test.rs"]
mod tests;
