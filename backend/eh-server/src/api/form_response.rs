//! Turning an [`ActionOutcome`] into an HTTP response

use crate::{ApiError, ApiResult};

use eh_actions::{ActionOutcome, Redirect, SessionUpdate};
use eh_auth::{CookieSettings, expired_cookie, session_cookie};

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

/// Render an action outcome.
///
/// - `Ok` → 200 with the `ActionResult` as JSON
/// - `Error` → 422 with the `ActionResult` as JSON
/// - `Redirect` → 303 with `Location` and any session cookie changes
pub fn respond(outcome: ActionOutcome, cookies: &CookieSettings) -> Response {
    match outcome {
        ActionOutcome::Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        ActionOutcome::Error(result) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(result)).into_response()
        }
        ActionOutcome::Redirect(redirect) => match see_other(&redirect, cookies) {
            Ok(response) => response,
            Err(e) => e.into_response(),
        },
    }
}

/// Set-Cookie values implied by a session update
pub fn session_cookies(update: &SessionUpdate, cookies: &CookieSettings) -> Vec<String> {
    match update {
        SessionUpdate::Keep => Vec::new(),
        SessionUpdate::Set(tokens) => {
            let mut values = vec![session_cookie(
                &cookies.access_cookie_name,
                &tokens.access_token,
                cookies.access_max_age_secs,
                cookies.secure,
            )];
            if let Some(ref refresh) = tokens.refresh_token {
                values.push(session_cookie(
                    &cookies.refresh_cookie_name,
                    refresh,
                    cookies.refresh_max_age_secs,
                    cookies.secure,
                ));
            }
            values
        }
        SessionUpdate::Clear => vec![
            expired_cookie(&cookies.access_cookie_name, cookies.secure),
            expired_cookie(&cookies.refresh_cookie_name, cookies.secure),
        ],
    }
}

fn see_other(redirect: &Redirect, cookies: &CookieSettings) -> ApiResult<Response> {
    let mut response = StatusCode::SEE_OTHER.into_response();
    let headers = response.headers_mut();

    headers.insert(header::LOCATION, header_value(&redirect.location)?);
    for cookie in session_cookies(&redirect.session, cookies) {
        headers.append(header::SET_COOKIE, header_value(&cookie)?);
    }

    Ok(response)
}

fn header_value(value: &str) -> ApiResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ApiError::internal(format!("Invalid response header value: {e}")))
}
