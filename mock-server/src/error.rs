//! Error responses produced by the mock API.
//!
//! Validation and auth failures use `{"error", "code"}` bodies; lookups that
//! fail use problem-style `{"title", "detail"}` bodies.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing or invalid bearer token")]
    Unauthorized,

    #[error("{0}")]
    Validation(String),

    #[error("invalid identifier: {0:?}")]
    InvalidId(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("simulated server failure")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidId(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        let body = match self {
            ApiError::Unauthorized => json!({"error": detail, "code": "UNAUTHORIZED"}),
            ApiError::Validation(_) => json!({"error": detail, "code": "VALIDATION_ERROR"}),
            ApiError::Internal => json!({"error": detail, "code": "INTERNAL_ERROR"}),
            ApiError::InvalidId(_) | ApiError::NotFound(_) => json!({
                "title": status.canonical_reason().unwrap_or("Error"),
                "detail": detail,
            }),
        };
        (status, Json(body)).into_response()
    }
}
