mod dashboard;
mod error;
mod extractors;
mod form_response;

use crate::AppState;

use eh_auth::{CookieSettings, JwtValidator};
use eh_client::BackendClient;
use eh_config::Environment;

use std::time::Duration;

pub(crate) const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// State whose backend is never reached
pub(crate) fn offline_state() -> AppState {
    let client = BackendClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    AppState::new(
        client,
        JwtValidator::with_hs256(SECRET),
        CookieSettings::default(),
        Environment::Development,
    )
}
