//! Hosted backend settings and their validation.

use reqwest::Url;

use super::BackendError;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Values shipped in sample `.env` files that mean "not configured".
const PLACEHOLDER_KEYS: &[&str] = &["your-anon-key", "your_supabase_anon_key", "your-supabase-anon-key", "changeme"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: Url,
    pub anon_key: String,
}

impl BackendConfig {
    /// Read `SUPABASE_URL` and `SUPABASE_ANON_KEY` and validate them.
    ///
    /// # Errors
    ///
    /// See [`BackendConfig::validate`].
    pub fn from_env() -> Result<Self, BackendError> {
        Self::validate(
            std::env::var(URL_VAR).ok().as_deref(),
            std::env::var(ANON_KEY_VAR).ok().as_deref(),
        )
    }

    /// # Errors
    ///
    /// Returns [`BackendError::NotConfigured`] for a missing or blank value,
    /// [`BackendError::InvalidUrl`] unless the URL parses with an `http` or
    /// `https` scheme, and [`BackendError::PlaceholderKey`] for sample keys.
    pub fn validate(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, BackendError> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(BackendError::NotConfigured(URL_VAR))?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(BackendError::NotConfigured(ANON_KEY_VAR))?;

        let parsed = Url::parse(url).map_err(|e| BackendError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(BackendError::InvalidUrl(url.to_owned()));
        }
        if PLACEHOLDER_KEYS.iter().any(|p| anon_key.eq_ignore_ascii_case(p)) {
            return Err(BackendError::PlaceholderKey);
        }

        Ok(Self { url: parsed, anon_key: anon_key.to_owned() })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
