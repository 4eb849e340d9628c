use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACCESS_COOKIE_NAME, DEFAULT_ACCESS_TOKEN_MAX_AGE_SECS,
    DEFAULT_REFRESH_COOKIE_NAME, DEFAULT_REFRESH_TOKEN_MAX_AGE_SECS, MIN_JWT_SECRET_LENGTH,
};

use std::path::Path;

use serde::Deserialize;

/// Access-token verification and session cookie settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret shared with the backend
    pub jwt_secret: Option<String>,
    /// RS256 public key (PEM), relative to the config directory
    pub jwt_public_key_path: Option<String>,
    pub access_cookie_name: String,
    pub refresh_cookie_name: String,
    /// Mark session cookies `Secure`
    pub cookie_secure: bool,
    pub access_token_max_age_secs: u64,
    pub refresh_token_max_age_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            jwt_public_key_path: None,
            access_cookie_name: String::from(DEFAULT_ACCESS_COOKIE_NAME),
            refresh_cookie_name: String::from(DEFAULT_REFRESH_COOKIE_NAME),
            cookie_secure: false,
            access_token_max_age_secs: DEFAULT_ACCESS_TOKEN_MAX_AGE_SECS,
            refresh_token_max_age_secs: DEFAULT_REFRESH_TOKEN_MAX_AGE_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.jwt_secret, &self.jwt_public_key_path) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::auth(
                    "set either auth.jwt_secret or auth.jwt_public_key_path, not both",
                ));
            }
            (None, None) => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret or auth.jwt_public_key_path is required",
                ));
            }
            (Some(secret), None) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} bytes",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            (None, Some(key_path)) => {
                let full_path = config_dir.join(key_path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_public_key_path not found: {}",
                        full_path.display()
                    )));
                }
            }
            _ => {}
        }

        if self.access_cookie_name.is_empty() || self.refresh_cookie_name.is_empty() {
            return Err(ConfigError::auth("cookie names cannot be empty"));
        }

        if self.access_cookie_name == self.refresh_cookie_name {
            return Err(ConfigError::auth(
                "auth.access_cookie_name and auth.refresh_cookie_name must differ",
            ));
        }

        if self.access_token_max_age_secs == 0 || self.refresh_token_max_age_secs == 0 {
            return Err(ConfigError::auth("cookie max ages must be greater than 0"));
        }

        Ok(())
    }
}
