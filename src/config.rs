//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const API_KEY_VAR: &str = "API_FOOTBALL_KEY";
pub const DEFAULT_STATS_API_BASE_URL: &str = "https://v3.football.api-sports.io";
pub const DEFAULT_STATS_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_STATS_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_LOCAL_STORE_PATH: &str = "data/local-store.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: &'static str },

    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeouts: StatsTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub stats: StatsConfig,
    /// File backing the local fallback store when no hosted backend is configured.
    pub local_store_path: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `API_FOOTBALL_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3001
    /// - `STATS_API_BASE_URL`: default `https://v3.football.api-sports.io`
    /// - `STATS_REQUEST_TIMEOUT_SECS`: default 15
    /// - `STATS_CONNECT_TIMEOUT_SECS`: default 5
    /// - `LOCAL_STORE_PATH`: default `data/local-store.json`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when the key is absent or blank,
    /// and [`ConfigError::Invalid`] for an unparseable `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey { var: API_KEY_VAR })?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };

        let base_url = std::env::var("STATS_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_STATS_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = StatsTimeouts {
            request_secs: env_parse("STATS_REQUEST_TIMEOUT_SECS", DEFAULT_STATS_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("STATS_CONNECT_TIMEOUT_SECS", DEFAULT_STATS_CONNECT_TIMEOUT_SECS),
        };
        let local_store_path = std::env::var("LOCAL_STORE_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_LOCAL_STORE_PATH), PathBuf::from);

        Ok(Self { port, stats: StatsConfig { api_key, base_url, timeouts }, local_store_path })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
