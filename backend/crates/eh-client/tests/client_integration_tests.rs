//! Integration tests for the backend client using wiremock mock server

use eh_client::{BackendClient, ClientError, FileUpload, Method};

use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, header, method, path},
};

fn client_for(server: &MockServer) -> BackendClient {
    BackendClient::new(&format!("{}/api/v1", server.uri()), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_send_json_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/forgot-password"))
        .and(body_json(json!({ "email": "a@example.com" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Reset link sent",
            "data": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client
        .send_json(
            Method::POST,
            "/auth/forgot-password",
            None,
            &json!({ "email": "a@example.com" }),
        )
        .await
        .unwrap();

    assert!(envelope.success);
    assert_eq!(envelope.message, "Reset link sent");
}

#[tokio::test]
async fn test_access_token_sent_raw_in_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user/me"))
        .and(header("Authorization", "token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Profile retrieved",
            "data": { "email": "a@example.com" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client.get("/user/me", Some("token-abc")).await.unwrap();

    assert_eq!(envelope.data_str("email"), Some("a@example.com"));
}

#[tokio::test]
async fn test_non_success_status_becomes_api_error_with_backend_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/event/e-1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "success": false,
            "message": "Forbidden: not the event host"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .send_empty(Method::DELETE, "/event/e-1", Some("t"))
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status, message, ..
        } => {
            assert_eq!(status, 403);
            assert_eq!(message, "Forbidden: not the event host");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_error_body_uses_status_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user/me"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/user/me", None).await.unwrap_err();

    assert_eq!(err.status(), Some(502));
    assert!(err.detail().contains("Bad Gateway"));
}

#[tokio::test]
async fn test_undecodable_success_body_is_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/user/me", None).await.unwrap_err();

    assert!(matches!(err, ClientError::Json { .. }));
}

#[tokio::test]
async fn test_send_multipart_carries_data_and_file_parts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/user/update-my-profile"))
        .and(body_string_contains("name=\"data\""))
        .and(body_string_contains("{\"name\":\"Ada\"}"))
        .and(body_string_contains("filename=\"me.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Profile updated"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let envelope = client
        .send_multipart(
            Method::PATCH,
            "/user/update-my-profile",
            Some("t"),
            &json!({ "name": "Ada" }),
            Some(FileUpload::new("me.png", "image/png", vec![1, 2, 3])),
        )
        .await
        .unwrap();

    assert_eq!(envelope.message, "Profile updated");
}

#[tokio::test]
async fn test_get_cached_hits_backend_once_until_revalidated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "ok",
            "data": { "email": "a@example.com" }
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    client.get_cached("/user/me", Some("t"), "user-info").await.unwrap();
    client.get_cached("/user/me", Some("t"), "user-info").await.unwrap();
    assert_eq!(client.revalidate_tag("user-info").await, 1);
    client.get_cached("/user/me", Some("t"), "user-info").await.unwrap();
}

#[tokio::test]
async fn test_get_cached_keeps_sessions_apart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "ok"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    client.get_cached("/user/me", Some("first"), "user-info").await.unwrap();
    client.get_cached("/user/me", Some("second"), "user-info").await.unwrap();
}

#[tokio::test]
async fn test_get_cached_refetches_after_ttl() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "ok"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).with_cache_ttl(Duration::ZERO);

    client.get_cached("/user/me", Some("t"), "user-info").await.unwrap();
    client.get_cached("/user/me", Some("t"), "user-info").await.unwrap();
}

#[tokio::test]
async fn test_send_multipart_serializes_typed_payload() {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Payload {
        contact_number: &'static str,
    }

    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v1/user/update-my-profile"))
        .and(body_string_contains("{\"contactNumber\":\"+123\"}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Profile updated"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .send_multipart(
            Method::PATCH,
            "/user/update-my-profile",
            Some("t"),
            &Payload {
                contact_number: "+123",
            },
            None,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_send_multipart_unserializable_payload_is_json_error() {
    struct Unserializable;

    impl serde::Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .send_multipart(Method::POST, "/event", Some("t"), &Unserializable, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Json { .. }));
}
