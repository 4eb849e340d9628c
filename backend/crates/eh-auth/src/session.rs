//! Explicit per-request session context.
//!
//! Handlers receive the session as a parameter instead of reading ambient
//! cookie state, which keeps every action testable with a hand-built context.

use crate::{Claims, JwtValidator, cookie_value};

use eh_core::Role;

use http::HeaderMap;
use http::header::AUTHORIZATION;
use log::debug;

/// Tokens handed out by the backend on login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Who is making the request, if anyone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    access_token: Option<String>,
    claims: Option<Claims>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(access_token: impl Into<String>, claims: Claims) -> Self {
        Self {
            access_token: Some(access_token.into()),
            claims: Some(claims),
        }
    }

    /// Resolve the session from the access cookie, falling back to a bearer
    /// token. A missing, expired or forged token yields an anonymous session.
    pub fn from_headers(
        headers: &HeaderMap,
        access_cookie_name: &str,
        validator: &JwtValidator,
    ) -> Self {
        let Some(token) =
            cookie_value(headers, access_cookie_name).or_else(|| bearer_token(headers))
        else {
            return Self::anonymous();
        };

        match validator.validate(&token) {
            Ok(claims) => Self::authenticated(token, claims),
            Err(e) => {
                debug!("Ignoring access token ({}): {}", e.error_code(), e);
                Self::anonymous()
            }
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.claims.as_ref().map(|c| c.role)
    }

    pub fn email(&self) -> Option<&str> {
        self.claims.as_ref().map(|c| c.email.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.claims.is_some()
    }

    /// Short identifier for log lines
    pub fn log_label(&self) -> String {
        match &self.claims {
            Some(claims) => format!("{}:{}", claims.role, claims.email),
            None => "anonymous".to_string(),
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
