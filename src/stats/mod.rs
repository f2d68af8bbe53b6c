//! Third-party football statistics upstream.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`PlayerSource`] trait, not on the HTTP client, so
//! routes can be exercised without network. The upstream body is relayed
//! verbatim as JSON; nothing here reshapes it.

pub mod api_sports;

pub use api_sports::ApiSportsClient;

/// Errors produced while calling the statistics API.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("stats request failed: {0}")]
    Request(String),

    /// The upstream answered with a non-success status.
    #[error("stats API returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    /// The upstream body was not valid JSON.
    #[error("stats response parse failed: {0}")]
    Parse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[async_trait::async_trait]
pub trait PlayerSource: Send + Sync {
    /// Search players by name for a season, returning the upstream JSON body.
    async fn search_players(&self, search: &str, season: &str) -> Result<serde_json::Value, StatsError>;
}
