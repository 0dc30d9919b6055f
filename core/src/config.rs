//! Harness configuration: the base address of the service under test.

use url::Url;

use crate::error::ConfigError;

pub const BASE_URL_ENV: &str = "SMOKE_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Immutable configuration handed to `SmokeClient` at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    base_url: String,
}

impl HarnessConfig {
    /// Validate `base_url` as an absolute http(s) URL. The string is kept as
    /// given; slash normalization happens when a path is joined onto it.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    scheme: other.to_string(),
                })
            }
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Read the base address from `SMOKE_BASE_URL`, falling back to
    /// `DEFAULT_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(std::env::var(BASE_URL_ENV).ok())
    }

    fn resolve(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(v) => Self::new(&v),
            None => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
