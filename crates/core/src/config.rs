use crate::errors::CoreError;

/// Environment variable holding the Financify REST API base URL.
pub const API_BASE_URL_VAR: &str = "FINANCIFY_API_BASE_URL";

/// Environment variable holding the Polygon.io API key for ticker search.
pub const POLYGON_API_KEY_VAR: &str = "FINANCIFY_POLYGON_API_KEY";

/// All external endpoints the library talks to, resolved in one place.
///
/// The single source of truth for the API base URL — callers never read
/// environment variables or assemble URLs themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Financify REST API, without a trailing slash
    /// (e.g., "https://api.financify.example").
    pub api_base_url: String,

    /// Optional Polygon.io API key. Without it, ticker search is unavailable
    /// but everything else works.
    pub polygon_api_key: Option<String>,
}

impl Config {
    /// Build a config with an explicit base URL and no ticker-search key.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self, CoreError> {
        let normalized = Self::normalize_url(api_base_url.into())?;
        Ok(Self {
            api_base_url: normalized,
            polygon_api_key: None,
        })
    }

    /// Attach a Polygon API key (builder style).
    #[must_use]
    pub fn with_polygon_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.polygon_api_key = if key.trim().is_empty() {
            None
        } else {
            Some(key)
        };
        self
    }

    /// Build a config from environment variables.
    /// `FINANCIFY_API_BASE_URL` is required; `FINANCIFY_POLYGON_API_KEY` is optional.
    pub fn from_env() -> Result<Self, CoreError> {
        let base_url = std::env::var(API_BASE_URL_VAR)
            .map_err(|_| CoreError::Config(format!("{API_BASE_URL_VAR} is not set")))?;
        let config = Self::new(base_url)?;
        match std::env::var(POLYGON_API_KEY_VAR) {
            Ok(key) => Ok(config.with_polygon_api_key(key)),
            Err(_) => Ok(config),
        }
    }

    /// Full URL for a path under the API base (path must start with '/').
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    fn normalize_url(url: String) -> Result<String, CoreError> {
        let trimmed = url.trim().trim_end_matches('/').to_string();
        if trimmed.is_empty() {
            return Err(CoreError::Config("API base URL must not be empty".into()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(CoreError::Config(format!(
                "API base URL must start with http:// or https:// (got '{trimmed}')"
            )));
        }
        Ok(trimmed)
    }
}
