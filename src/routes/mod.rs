//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser app calls this server for player search (proxied to the
//! statistics API so the key stays server-side), for shared tops, and for a
//! liveness probe. CORS is wide open because the app is served from a
//! different origin during development.

pub mod health;
pub mod players;
pub mod tops;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::tops::TopError;
use crate::state::AppState;
use crate::stats::StatsError;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/api/players", get(players::search))
        .route("/api/capabilities", get(health::capabilities))
        .route("/api/tops", get(tops::list).post(tops::create))
        .route("/api/tops/{id}", get(tops::get))
        .route("/api/tops/{id}/like", post(tops::like))
        .route("/api/tops/{id}/share", post(tops::share))
        .route("/api/tops/{id}/comments", post(tops::comment))
        .route("/api/tops/{id}/comments/{comment_id}/like", post(tops::like_comment))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Errors surfaced to HTTP callers as a status plus JSON body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// Upstream statistics failure; the body carries a fallback hint.
    #[error("failed to fetch players: {0}")]
    Upstream(#[from] StatsError),

    #[error(transparent)]
    Tops(#[from] TopError),
}

pub(crate) const PLAYERS_FALLBACK_HINT: &str = "Using local player data";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            Self::Upstream(e) => {
                tracing::warn!(error = %e, "player search failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to fetch players",
                        "details": e.to_string(),
                        "fallback": PLAYERS_FALLBACK_HINT,
                    }),
                )
            }
            Self::Tops(e) => (top_error_to_status(e), json!({ "error": e.to_string() })),
        };
        (status, Json(body)).into_response()
    }
}

pub(crate) fn top_error_to_status(err: &TopError) -> StatusCode {
    match err {
        TopError::Validation(_) => StatusCode::BAD_REQUEST,
        TopError::NotFound(_) | TopError::CommentNotFound(_) => StatusCode::NOT_FOUND,
        TopError::Backend(e) => {
            tracing::error!(error = %e, "shared top backend failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
