use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BACKEND_BASE_URL, DEFAULT_BACKEND_CACHE_TTL_SECS,
    DEFAULT_BACKEND_TIMEOUT_SECS, MAX_BACKEND_CACHE_TTL_SECS, MAX_BACKEND_TIMEOUT_SECS,
    MIN_BACKEND_CACHE_TTL_SECS, MIN_BACKEND_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// Where the REST backend lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// How long cached person info stays fresh
    pub cache_ttl_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BACKEND_BASE_URL),
            timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS,
            cache_ttl_secs: DEFAULT_BACKEND_CACHE_TTL_SECS,
        }
    }
}

impl BackendConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::backend(format!(
                "backend.base_url '{}' is not a valid URL: {}",
                self.base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::backend(format!(
                "backend.base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if !(MIN_BACKEND_TIMEOUT_SECS..=MAX_BACKEND_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::backend(format!(
                "backend.timeout_secs must be {}-{}, got {}",
                MIN_BACKEND_TIMEOUT_SECS, MAX_BACKEND_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if !(MIN_BACKEND_CACHE_TTL_SECS..=MAX_BACKEND_CACHE_TTL_SECS).contains(&self.cache_ttl_secs)
        {
            return Err(ConfigError::backend(format!(
                "backend.cache_ttl_secs must be {}-{}, got {}",
                MIN_BACKEND_CACHE_TTL_SECS, MAX_BACKEND_CACHE_TTL_SECS, self.cache_ttl_secs
            )));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
