use crate::ApiError;

use eh_client::ClientError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use axum::http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Event not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Event not found");
}

#[tokio::test]
async fn test_bad_request_returns_400_with_field() {
    let response = ApiError::bad_request("path must be an absolute path", Some("path"))
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert_eq!(json["error"]["field"], "path");
}

#[tokio::test]
async fn test_internal_error_omits_field() {
    let response = ApiError::internal("boom").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_backend_failure_maps_to_bad_gateway() {
    let error: ApiError = ClientError::api_error(500, "Database unavailable").into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "BAD_GATEWAY");
    assert_eq!(json["error"]["message"], "Database unavailable");
}

#[tokio::test]
async fn test_backend_not_found_maps_to_404() {
    let error: ApiError = ClientError::api_error(404, "Person not found").into();

    assert_eq!(error.into_response().status(), StatusCode::NOT_FOUND);
}
