//! Integer path parameter extractor with automatic validation.

use crate::errors::{AppError, FieldError};
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};

/// Extractor for integer `:id` path parameters.
///
/// Parses the raw path segment and rejects anything that is not an integer
/// with `400 {"errors":[{"msg":"Id not valid",...}]}`, a single entry
/// matching the id rule of the validation layer.
///
/// # Example
/// ```ignore
/// use axum_helpers::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product ID: {}", id)
/// }
/// ```
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match raw.trim().parse::<i64>() {
            Ok(id) => Ok(IdPath(id)),
            Err(_) => Err(
                AppError::Validation(vec![FieldError::params("Id not valid", "id")])
                    .into_response(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        async fn show(IdPath(id): IdPath) -> String {
            id.to_string()
        }

        Router::new().route("/{id}", get(show))
    }

    #[tokio::test]
    async fn test_parses_integer_ids() {
        let response = app()
            .oneshot(Request::get("/42").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"42");
    }

    #[tokio::test]
    async fn test_rejects_non_integer_ids() {
        let response = app()
            .oneshot(Request::get("/not-valid").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["msg"], "Id not valid");
    }

    #[tokio::test]
    async fn test_accepts_negative_integers() {
        // Negative ids parse; they simply match no row downstream
        let response = app()
            .oneshot(Request::get("/-3").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
