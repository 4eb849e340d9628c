//! Route guard for reverse-proxy sub-requests

use crate::{ApiError, ApiResult, api::extractors::session::Session};

use eh_core::{GuardDecision, guard};

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GuardQuery {
    #[serde(default)]
    pub path: String,
}

/// GET /guard?path=/host/events
///
/// 204 when the visitor may see `path`, otherwise 303 to where they belong.
pub async fn check_route(
    Session(session): Session,
    Query(query): Query<GuardQuery>,
) -> ApiResult<Response> {
    if !query.path.starts_with('/') {
        return Err(ApiError::bad_request(
            "path must be an absolute path",
            Some("path"),
        ));
    }

    match guard(&query.path, session.role()) {
        GuardDecision::Allow => Ok(StatusCode::NO_CONTENT.into_response()),
        GuardDecision::Redirect(location) => {
            log::debug!(
                "{} redirected from {} to {}",
                session.log_label(),
                query.path,
                location
            );
            Ok(Redirect::to(&location).into_response())
        }
    }
}
