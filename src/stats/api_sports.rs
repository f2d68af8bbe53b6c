//! API-Sports football client.
//!
//! Thin HTTP wrapper for `GET /players`. The secret key travels in the
//! `x-apisports-key` header and never reaches the browser.

use std::time::Duration;

use tracing::{debug, warn};

use super::{PlayerSource, StatsError};
use crate::config::StatsConfig;

const API_KEY_HEADER: &str = "x-apisports-key";

pub struct ApiSportsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ApiSportsClient {
    /// # Errors
    ///
    /// Returns [`StatsError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: StatsConfig) -> Result<Self, StatsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| StatsError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, api_key: config.api_key })
    }
}

#[async_trait::async_trait]
impl PlayerSource for ApiSportsClient {
    async fn search_players(&self, search: &str, season: &str) -> Result<serde_json::Value, StatsError> {
        let url = format!("{}/players", self.base_url);
        debug!(%url, search, season, "forwarding player search");

        let response = self
            .http
            .get(&url)
            .query(&[("search", search), ("season", season)])
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| StatsError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| StatsError::Request(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "stats API returned non-success status");
            return Err(StatsError::UpstreamStatus { status: status.as_u16(), body: text });
        }

        serde_json::from_str(&text).map_err(|e| StatsError::Parse(e.to_string()))
    }
}

#[cfg(test)]
#[path = "api_sports_test.rs"]
mod tests;
