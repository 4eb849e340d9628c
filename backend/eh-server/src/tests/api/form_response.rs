use crate::{respond, session_cookies};

use eh_actions::{ActionOutcome, Redirect, SessionUpdate};
use eh_auth::{CookieSettings, SessionTokens};
use eh_core::{ActionResult, FieldError};

use axum::http::{StatusCode, header};
use http_body_util::BodyExt;

fn tokens(refresh: Option<&str>) -> SessionTokens {
    SessionTokens {
        access_token: "access-abc".to_string(),
        refresh_token: refresh.map(str::to_string),
    }
}

#[tokio::test]
async fn test_ok_outcome_renders_200_json() {
    let response = respond(
        ActionOutcome::success("Event created"),
        &CookieSettings::default(),
    );

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Event created");
}

#[tokio::test]
async fn test_error_outcome_renders_422_with_field_errors() {
    let result = ActionResult::rejected(
        "Validation failed",
        vec![FieldError::new("email", "Invalid email address")],
        serde_json::Map::new(),
    );
    let response = respond(ActionOutcome::Error(result), &CookieSettings::default());

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"][0]["field"], "email");
}

#[test]
fn test_redirect_renders_303_with_location() {
    let response = respond(
        ActionOutcome::redirect("/dashboard"),
        &CookieSettings::default(),
    );

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/dashboard");
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[test]
fn test_redirect_with_new_session_sets_both_cookies() {
    let outcome = ActionOutcome::Redirect(Redirect::with_session(
        "/host/dashboard",
        SessionUpdate::Set(tokens(Some("refresh-xyz"))),
    ));
    let response = respond(outcome, &CookieSettings::default());

    let cookies: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();

    assert_eq!(cookies.len(), 2);
    assert!(cookies[0].starts_with("accessToken=access-abc;"));
    assert!(cookies[0].contains("HttpOnly"));
    assert!(cookies[1].starts_with("refreshToken=refresh-xyz;"));
}

#[test]
fn test_set_without_refresh_token_sets_access_cookie_only() {
    let cookies = session_cookies(
        &SessionUpdate::Set(tokens(None)),
        &CookieSettings::default(),
    );

    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].contains("Max-Age=3600"));
}

#[test]
fn test_clear_expires_both_cookies() {
    let settings = CookieSettings {
        secure: true,
        ..CookieSettings::default()
    };
    let cookies = session_cookies(&SessionUpdate::Clear, &settings);

    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")));
    assert!(cookies.iter().all(|c| c.ends_with("; Secure")));
}

#[test]
fn test_keep_emits_no_cookies() {
    assert!(session_cookies(&SessionUpdate::Keep, &CookieSettings::default()).is_empty());
}
