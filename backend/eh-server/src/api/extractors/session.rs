//! Axum extractor for the visitor's session

use crate::AppState;

use eh_auth::SessionContext;

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Session decoded from the access-token cookie (or a Bearer header).
///
/// Never rejects: a missing or unverifiable token yields an anonymous
/// session and the handler decides what that means.
pub struct Session(pub SessionContext);

impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let session = SessionContext::from_headers(
                &parts.headers,
                &state.cookies.access_cookie_name,
                &state.validator,
            );
            log::debug!("Request session: {}", session.log_label());
            Ok(Session(session))
        }
    }
}
