//! Shared-top routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use models::{NewTop, SharedTop};
use serde::Deserialize;
use uuid::Uuid;

use super::ApiError;
use crate::services::tops::{self as tops_svc, NewComment};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

/// `GET /api/tops?category=..`: newest first.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<SharedTop>>, ApiError> {
    let category = query.category.as_deref().filter(|c| !c.is_empty());
    Ok(Json(tops_svc::list(state.tops.as_ref(), category).await?))
}

/// `POST /api/tops`: publish a ranked list.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewTop>,
) -> Result<(StatusCode, Json<SharedTop>), ApiError> {
    let top = tops_svc::create(state.tops.as_ref(), new).await?;
    tracing::info!(top_id = %top.id, category = %top.category, "shared top created");
    Ok((StatusCode::CREATED, Json(top)))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SharedTop>, ApiError> {
    Ok(Json(tops_svc::get(state.tops.as_ref(), id).await?))
}

pub async fn like(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SharedTop>, ApiError> {
    Ok(Json(tops_svc::toggle_like(state.tops.as_ref(), id).await?))
}

pub async fn share(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SharedTop>, ApiError> {
    Ok(Json(tops_svc::share(state.tops.as_ref(), id).await?))
}

/// `POST /api/tops/{id}/comments`: comment, or reply when `parent_id` is set.
pub async fn comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(new): Json<NewComment>,
) -> Result<(StatusCode, Json<SharedTop>), ApiError> {
    let top = tops_svc::comment(state.tops.as_ref(), id, new).await?;
    Ok((StatusCode::CREATED, Json(top)))
}

pub async fn like_comment(
    State(state): State<AppState>,
    Path((id, comment_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<SharedTop>, ApiError> {
    Ok(Json(tops_svc::toggle_comment_like(state.tops.as_ref(), id, comment_id).await?))
}
