//! Hosted REST backend for shared tops.
//!
//! Talks to the `shared_tops` table through the backend's REST gateway
//! (`/rest/v1/shared_tops`). Every request carries the anon key both as
//! `apikey` and as a bearer token; writes ask for the stored row back with
//! `Prefer: return=representation`.

use std::time::Duration;

use models::SharedTop;
use reqwest::{Method, RequestBuilder, Url};
use uuid::Uuid;

use super::{BackendConfig, BackendError, TopEdit, TopStore};

const TABLE_PATH: &str = "rest/v1/shared_tops";
const REQUEST_TIMEOUT_SECS: u64 = 15;

pub struct HostedTopStore {
    http: reqwest::Client,
    table_url: Url,
    anon_key: String,
}

impl HostedTopStore {
    /// # Errors
    ///
    /// Returns an error if the table URL cannot be derived or the HTTP client
    /// fails to build.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let mut base = config.url;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let table_url = base
            .join(TABLE_PATH)
            .map_err(|e| BackendError::InvalidUrl(e.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| BackendError::Request(e.to_string()))?;
        Ok(Self { http, table_url, anon_key: config.anon_key })
    }

    #[must_use]
    pub fn table_url(&self) -> &Url {
        &self.table_url
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.http
            .request(method, self.table_url.clone())
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn rows(&self, builder: RequestBuilder) -> Result<Vec<SharedTop>, BackendError> {
        let response = builder
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(BackendError::Status { status: status.as_u16(), body: text });
        }
        parse_rows(&text)
    }
}

#[async_trait::async_trait]
impl TopStore for HostedTopStore {
    async fn list(&self, category: Option<&str>) -> Result<Vec<SharedTop>, BackendError> {
        let mut query = vec![("select", "*".to_owned()), ("order", "created_at.desc".to_owned())];
        if let Some(category) = category {
            query.push(("category", format!("eq.{category}")));
        }
        self.rows(self.request(Method::GET).query(&query)).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<SharedTop>, BackendError> {
        let query = [("select", "*".to_owned()), ("id", format!("eq.{id}"))];
        let rows = self.rows(self.request(Method::GET).query(&query)).await?;
        Ok(rows.into_iter().next())
    }

    async fn insert(&self, top: SharedTop) -> Result<SharedTop, BackendError> {
        let builder = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&top);
        self.rows(builder)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::Parse("insert returned no row".into()))
    }

    async fn update(&self, top: SharedTop) -> Result<SharedTop, BackendError> {
        let id = top.id;
        let builder = self
            .request(Method::PATCH)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&top);
        self.rows(builder)
            .await?
            .into_iter()
            .next()
            .ok_or(BackendError::Missing(id))
    }

    /// Fetch, edit and PATCH the row. Concurrent edits from other clients
    /// are last-writer-wins.
    async fn modify(&self, id: Uuid, edit: TopEdit) -> Result<SharedTop, BackendError> {
        let mut top = self.get(id).await?.ok_or(BackendError::Missing(id))?;
        edit(&mut top)?;
        self.update(top).await
    }
}

fn parse_rows(json: &str) -> Result<Vec<SharedTop>, BackendError> {
    serde_json::from_str(json).map_err(|e| BackendError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "hosted_test.rs"]
mod tests;
