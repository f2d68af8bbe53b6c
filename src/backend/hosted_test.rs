use std::collections::HashMap;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use models::NewTop;

use super::*;

fn sample(category: &str) -> SharedTop {
    SharedTop::new(NewTop {
        user_id: "u1".into(),
        user_name: "Ana".into(),
        user_avatar: None,
        title: "Podium".into(),
        category: category.into(),
        players: Vec::new(),
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("apikey").and_then(|v| v.to_str().ok()) == Some("anon")
        && headers.get("authorization").and_then(|v| v.to_str().ok()) == Some("Bearer anon")
}

async fn fake_rest() -> String {
    async fn list(headers: HeaderMap, Query(q): Query<HashMap<String, String>>) -> Result<Json<Vec<SharedTop>>, StatusCode> {
        if !authorized(&headers) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        let category = q
            .get("category")
            .and_then(|c| c.strip_prefix("eq."))
            .unwrap_or("all");
        Ok(Json(vec![sample(category)]))
    }
    async fn insert(headers: HeaderMap, Json(top): Json<SharedTop>) -> Result<(StatusCode, Json<Vec<SharedTop>>), StatusCode> {
        if headers.get("prefer").and_then(|v| v.to_str().ok()) != Some("return=representation") {
            return Err(StatusCode::BAD_REQUEST);
        }
        Ok((StatusCode::CREATED, Json(vec![top])))
    }
    async fn patch() -> Json<Vec<SharedTop>> {
        Json(Vec::new())
    }

    let app = Router::new().route("/rest/v1/shared_tops", get(list).post(insert).patch(patch));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn store(base: &str) -> HostedTopStore {
    let config = BackendConfig::validate(Some(base), Some("anon")).unwrap();
    HostedTopStore::new(config).unwrap()
}

#[test]
fn table_url_appends_rest_path() {
    let s = store("https://abc.supabase.co");
    assert_eq!(s.table_url().as_str(), "https://abc.supabase.co/rest/v1/shared_tops");

    let s = store("https://proxy.example/base");
    assert_eq!(s.table_url().as_str(), "https://proxy.example/base/rest/v1/shared_tops");
}

#[tokio::test]
async fn list_sends_auth_and_category_filter() {
    let base = fake_rest().await;
    let tops = store(&base).list(Some("defenders")).await.unwrap();
    assert_eq!(tops.len(), 1);
    assert_eq!(tops[0].category, "defenders");
}

#[tokio::test]
async fn insert_returns_representation() {
    let base = fake_rest().await;
    let top = sample("forwards");
    let stored = store(&base).insert(top.clone()).await.unwrap();
    assert_eq!(stored, top);
}

#[tokio::test]
async fn update_with_no_rows_is_missing() {
    let base = fake_rest().await;
    let top = sample("forwards");
    let err = store(&base).update(top.clone()).await.unwrap_err();
    assert!(matches!(err, BackendError::Missing(id) if id == top.id));
}

#[tokio::test]
async fn wrong_key_surfaces_status() {
    let base = fake_rest().await;
    let config = BackendConfig::validate(Some(&base), Some("other")).unwrap();
    let err = HostedTopStore::new(config).unwrap().list(None).await.unwrap_err();
    assert!(matches!(err, BackendError::Status { status: 401, .. }));
}

#[tokio::test]
async fn modify_stops_before_patch_when_edit_fails() {
    let base = fake_rest().await;
    let edit: TopEdit = Box::new(|_: &mut SharedTop| Err(models::ModelError::CommentNotFound(Uuid::nil())));
    let err = store(&base).modify(Uuid::nil(), edit).await.unwrap_err();
    assert!(matches!(err, BackendError::Model(_)));
}
