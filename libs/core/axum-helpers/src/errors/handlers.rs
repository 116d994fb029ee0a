use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Handler for 404 Not Found errors.
///
/// Used as the router fallback for paths outside the API surface.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "resource not found".to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
