//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web
//! applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: error responses in the API's wire format
//! - **[`extractors`]**: custom extractors (integer path parameter)
//! - **[`http`]**: CORS layer built over a pure origin predicate
//! - **[`server`]**: server setup, health route, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse, FieldError, ValidationErrorResponse};

// Re-export extractors
pub use extractors::IdPath;

// Re-export HTTP middleware
pub use http::{cors_layer, origin_allowed};

// Re-export server types
pub use server::{
    HealthResponse, ShutdownCoordinator, create_app, create_production_app, create_router,
    health_router, shutdown_signal,
};
