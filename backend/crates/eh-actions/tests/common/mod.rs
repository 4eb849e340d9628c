#![allow(dead_code)]

use eh_actions::ActionContext;
use eh_auth::{Claims, JwtValidator, SessionContext};
use eh_client::BackendClient;
use eh_config::Environment;
use eh_core::Role;

use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use wiremock::MockServer;

pub const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub fn claims_for(role: Role) -> Claims {
    let now = chrono::Utc::now().timestamp();
    Claims {
        id: format!("{}-1", role.as_str().to_lowercase()),
        email: format!("{}@example.com", role.as_str().to_lowercase()),
        role,
        exp: now + 3600,
        iat: now,
    }
}

pub fn token_for(role: Role) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims_for(role),
        &EncodingKey::from_secret(SECRET),
    )
    .unwrap()
}

pub fn context(
    server: &MockServer,
    session: SessionContext,
    environment: Environment,
) -> ActionContext {
    ActionContext::new(
        BackendClient::new(&server.uri(), Duration::from_secs(5)).unwrap(),
        session,
        Arc::new(JwtValidator::with_hs256(SECRET)),
        environment,
    )
}

pub fn anonymous(server: &MockServer) -> ActionContext {
    context(server, SessionContext::anonymous(), Environment::Production)
}

pub fn signed_in(server: &MockServer, role: Role) -> ActionContext {
    let token = token_for(role);
    context(
        server,
        SessionContext::authenticated(token, claims_for(role)),
        Environment::Production,
    )
}
