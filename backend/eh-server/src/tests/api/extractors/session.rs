use crate::Session;
use crate::tests::api::{SECRET, offline_state};

use eh_auth::Claims;
use eh_core::Role;

use axum::{extract::FromRequestParts, http::Request};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

fn token(role: Role, secret: &[u8]) -> String {
    let claims = Claims {
        id: "person-1".to_string(),
        email: "person@example.com".to_string(),
        role,
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .unwrap()
}

async fn extract(request: Request<()>) -> Session {
    let state = offline_state();
    let (mut parts, _) = request.into_parts();
    Session::from_request_parts(&mut parts, &state).await.unwrap()
}

#[tokio::test]
async fn test_session_from_access_cookie() {
    let request = Request::builder()
        .header("Cookie", format!("theme=dark; accessToken={}", token(Role::Admin, SECRET)))
        .body(())
        .unwrap();

    let Session(session) = extract(request).await;

    assert!(session.is_authenticated());
    assert_eq!(session.role(), Some(Role::Admin));
}

#[tokio::test]
async fn test_session_from_bearer_header() {
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token(Role::User, SECRET)))
        .body(())
        .unwrap();

    let Session(session) = extract(request).await;

    assert_eq!(session.role(), Some(Role::User));
}

#[tokio::test]
async fn test_missing_token_is_anonymous() {
    let request = Request::builder().body(()).unwrap();

    let Session(session) = extract(request).await;

    assert!(!session.is_authenticated());
    assert_eq!(session.log_label(), "anonymous");
}

#[tokio::test]
async fn test_token_signed_with_other_key_is_anonymous() {
    let forged = token(Role::Admin, b"some-other-secret-that-is-long-enough");
    let request = Request::builder()
        .header("Cookie", format!("accessToken={forged}"))
        .body(())
        .unwrap();

    let Session(session) = extract(request).await;

    assert!(!session.is_authenticated());
    assert_eq!(session.role(), None);
}
