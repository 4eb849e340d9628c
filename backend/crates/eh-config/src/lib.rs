mod auth_config;
mod backend_config;
mod config;
mod environment;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use backend_config::BackendConfig;
pub use config::Config;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "EH_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".eventhub";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;

const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:5000/api/v1";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;
const MIN_BACKEND_TIMEOUT_SECS: u64 = 1;
const MAX_BACKEND_TIMEOUT_SECS: u64 = 300;
const DEFAULT_BACKEND_CACHE_TTL_SECS: u64 = 60;
const MIN_BACKEND_CACHE_TTL_SECS: u64 = 1;
const MAX_BACKEND_CACHE_TTL_SECS: u64 = 3600;

const DEFAULT_ACCESS_COOKIE_NAME: &str = "accessToken";
const DEFAULT_REFRESH_COOKIE_NAME: &str = "refreshToken";
const DEFAULT_ACCESS_TOKEN_MAX_AGE_SECS: u64 = 60 * 60;
const DEFAULT_REFRESH_TOKEN_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 90;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
