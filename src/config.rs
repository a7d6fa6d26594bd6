//! Client configuration loaded from environment variables.
//!
//! Only the API base URL is configurable. A `.env` file is honoured for local
//! development.

use reqwest::Url;
use std::env;

/// Environment variable overriding the API base URL.
pub const API_BASE_URL_VAR: &str = "VITE_API_BASE_URL";

/// Base URL used when no override is set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/";

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root; always ends with `/` so relative paths join beneath it
    pub api_base_url: Url,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL)
                .expect("default API base URL is valid"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// An unset or empty `VITE_API_BASE_URL` falls back to the local default.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        match env::var(API_BASE_URL_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::with_base_url(value.trim()),
            _ => Ok(Self::default()),
        }
    }

    /// Build a config for an explicit base URL (tests, CLI override).
    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let mut url =
            Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self { api_base_url: url })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}
