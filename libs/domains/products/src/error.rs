use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, FieldError};
use thiserror::Error;

/// Message used by every 404 response of the products resource
pub const PRODUCT_NOT_FOUND: &str = "product not found";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product not found")]
    NotFound,

    #[error("invalid input")]
    Validation(Vec<FieldError>),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Convert ProductError to AppError for the wire-format error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound => AppError::NotFound(PRODUCT_NOT_FOUND.to_string()),
            ProductError::Validation(errors) => AppError::Validation(errors),
            ProductError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
