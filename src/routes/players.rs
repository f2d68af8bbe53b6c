//! Player search proxy.

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;

use super::ApiError;
use crate::state::AppState;

pub const DEFAULT_SEASON: &str = "2023";

#[derive(Debug, Deserialize)]
pub struct PlayerQuery {
    pub search: Option<String>,
    pub season: Option<String>,
}

/// `GET /api/players?search=..&season=..`: relay the upstream body verbatim.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<PlayerQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let search = query
        .search
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Search parameter is required".into()))?;
    let season = query
        .season
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SEASON.to_owned());

    let body = state.players.search_players(&search, &season).await?;
    Ok(Json(body))
}
