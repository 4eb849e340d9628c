//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes. Form actions never end up here;
//! their failures travel as an `ActionResult`.

use eh_client::ClientError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "BAD_REQUEST", "BAD_GATEWAY")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if the error concerns a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Backend answered with a failure or could not be reached (502)
    #[error("Backend error: {message} {location}")]
    BadGateway {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>, field: Option<&str>) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code sent to the client
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::BadGateway { .. } => "BAD_GATEWAY",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Server-side failures are ours to look at; client mistakes are not
        if self.status().is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let status = self.status();
        let code = self.code().to_string();
        let (message, field) = match self {
            ApiError::BadRequest { message, field, .. } => (message, field),
            ApiError::NotFound { message, .. }
            | ApiError::BadGateway { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorResponse {
            error: ApiErrorBody {
                code,
                message,
                field,
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Convert backend client errors to API errors
impl From<ClientError> for ApiError {
    #[track_caller]
    fn from(e: ClientError) -> Self {
        log::warn!("Backend call failed: {}", e);

        match e.status() {
            Some(404) => ApiError::NotFound {
                message: e.detail().to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => ApiError::BadGateway {
                message: e.detail().to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert multipart decoding errors to API errors
impl From<axum::extract::multipart::MultipartError> for ApiError {
    #[track_caller]
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid multipart body: {}", e.body_text()),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
