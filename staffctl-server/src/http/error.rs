//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status
//! codes. Every body follows the `{error, details?}` shape clients
//! depend on, with `details` a message list for validation failures
//! and a single string elsewhere.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationErrors;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Field validation failed (400)
    Validation(ValidationErrors),

    /// Request body was not readable JSON (400)
    InvalidBody(String),

    /// Employee id matched nothing (404)
    NotFound,

    /// Email already taken (409)
    Conflict,

    /// Storage failure (500, logged)
    Database(String),

    /// No route matched (404)
    RouteNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Validation failed",
                    "details": errors.messages()
                }),
            ),
            Self::InvalidBody(reason) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "Invalid JSON body",
                    "details": reason
                }),
            ),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Employee not found"
                }),
            ),
            Self::Conflict => (
                StatusCode::CONFLICT,
                json!({
                    "error": "Email already exists"
                }),
            ),
            Self::Database(message) => {
                tracing::error!("Database error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Database error",
                        "details": message
                    }),
                )
            }
            Self::RouteNotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "Route not found"
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::DuplicateEmail => Self::Conflict,
            DbError::Sqlx(inner) => Self::Database(inner.to_string()),
        }
    }
}
