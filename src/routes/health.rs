//! Liveness and capability probes.

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::backend::BackendMode;
use crate::state::AppState;

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
}

/// `GET /health`: always `OK` with the current UTC time.
pub async fn health() -> Json<Health> {
    let now = OffsetDateTime::now_utc();
    // Rfc3339 only fails for years outside 0..=9999.
    let timestamp = now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string());
    Json(Health { status: "OK", timestamp })
}

#[derive(Serialize)]
pub struct Capabilities {
    pub backend: BackendMode,
}

/// `GET /api/capabilities`: which shared-top backend is active.
pub async fn capabilities(State(state): State<AppState>) -> Json<Capabilities> {
    Json(Capabilities { backend: state.backend_mode })
}
