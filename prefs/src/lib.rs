//! Local persisted preferences: key-value storage, feature flags and the
//! admin session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app kept these in `localStorage`. Here the same keys live in a
//! [`KvStore`], either in memory or in a single JSON file, so the server's
//! local fallback mode and the CLI read and write the same state. Values are
//! stored as strings; there is no schema versioning or migration.

pub mod admin;
pub mod flags;
pub mod store;

pub use admin::{AdminProfile, AdminSession};
pub use flags::FeatureFlags;
pub use store::{FileStore, KvStore, MemoryStore, PrefsError, load_json, save_json};
