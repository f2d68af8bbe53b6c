//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the statistics upstream and the shared-top store chosen at startup,
//! both behind trait objects so tests can swap in fakes.

use std::sync::Arc;

use crate::backend::{BackendMode, TopStore};
use crate::stats::PlayerSource;

/// Clone is required by Axum; every field is `Arc`-wrapped or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub players: Arc<dyn PlayerSource>,
    pub tops: Arc<dyn TopStore>,
    pub backend_mode: BackendMode,
}

impl AppState {
    #[must_use]
    pub fn new(players: Arc<dyn PlayerSource>, backend_mode: BackendMode, tops: Arc<dyn TopStore>) -> Self {
        Self { players, tops, backend_mode }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
