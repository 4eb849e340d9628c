use crate::error::{Result as ServerErrorResult, ServerError};

use eh_actions::ActionContext;
use eh_auth::{CookieSettings, JwtAlgorithm, JwtValidator, SessionContext};
use eh_client::BackendClient;
use eh_config::{Config, ConfigError, Environment};

use std::sync::Arc;

use log::info;
use metrics_exporter_prometheus::PrometheusHandle;

/// Shared, cheaply clonable state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub client: BackendClient,
    pub validator: Arc<JwtValidator>,
    pub cookies: CookieSettings,
    pub environment: Environment,
    /// None when no recorder was installed (tests)
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        client: BackendClient,
        validator: JwtValidator,
        cookies: CookieSettings,
        environment: Environment,
    ) -> Self {
        Self {
            client,
            validator: Arc::new(validator),
            cookies,
            environment,
            metrics: None,
        }
    }

    /// Build state from validated configuration
    pub fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let client = BackendClient::new(&config.backend.base_url, config.backend.timeout())?
            .with_cache_ttl(config.backend.cache_ttl());
        let validator = Self::jwt_validator(config)?;

        let auth = &config.auth;
        let cookies = CookieSettings {
            access_cookie_name: auth.access_cookie_name.clone(),
            refresh_cookie_name: auth.refresh_cookie_name.clone(),
            secure: auth.cookie_secure,
            access_max_age_secs: auth.access_token_max_age_secs,
            refresh_max_age_secs: auth.refresh_token_max_age_secs,
        };

        Ok(Self::new(client, validator, cookies, config.environment))
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Per-request action context bound to `session`
    pub fn action_context(&self, session: SessionContext) -> ActionContext {
        ActionContext::new(
            self.client.clone(),
            session,
            Arc::clone(&self.validator),
            self.environment,
        )
    }

    fn jwt_validator(config: &Config) -> ServerErrorResult<JwtValidator> {
        let algorithm = match (&config.auth.jwt_secret, &config.auth.jwt_public_key_path) {
            (Some(secret), _) => JwtAlgorithm::HS256 {
                secret: secret.as_bytes().to_vec(),
            },
            (None, Some(key_path)) => {
                let full_path = Config::config_dir()?.join(key_path);
                let public_key_pem = std::fs::read_to_string(&full_path).map_err(|e| {
                    ServerError::JwtKeyFile {
                        path: full_path.display().to_string(),
                        source: e,
                    }
                })?;
                JwtAlgorithm::RS256 { public_key_pem }
            }
            (None, None) => {
                return Err(ServerError::Config(ConfigError::auth(
                    "auth.jwt_secret or auth.jwt_public_key_path is required",
                )));
            }
        };

        let validator = JwtValidator::from_algorithm(&algorithm)?;
        info!("JWT: {} validation enabled", validator.algorithm());
        Ok(validator)
    }
}
