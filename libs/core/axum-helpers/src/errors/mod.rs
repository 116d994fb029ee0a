pub mod handlers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A single failed validation rule.
///
/// `msg` is the client-facing message; `path` names the offending field and
/// `location` says where it came from (`body` or `params`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    /// Human-readable message for the failed rule
    pub msg: String,
    /// Field or parameter name
    pub path: String,
    /// Where the value came from: "body" or "params"
    pub location: &'static str,
}

impl FieldError {
    /// A rule violation on a request-body field
    pub fn body(msg: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            path: path.into(),
            location: "body",
        }
    }

    /// A rule violation on a path parameter
    pub fn params(msg: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            path: path.into(),
            location: "params",
        }
    }
}

/// 400 response body: the list of violated rules
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Single-message error body, used for 404 and 500 responses
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type that converts into HTTP responses.
///
/// Validation failures surface as `400 {"errors":[...]}`, missing resources
/// as `404 {"error":...}`. Anything from the persistence layer is logged
/// with context and mapped to a generic `500 {"error":...}` body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                tracing::info!("Validation failed: {} error(s)", errors.len());
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse { errors }),
                )
                    .into_response()
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: msg })).into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                internal_error_response()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                internal_error_response()
            }
        }
    }
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "internal server error".to_string(),
        }),
    )
        .into_response()
}
