use axum::http::{HeaderValue, Method, header::InvalidHeaderValue};
use core_config::cors::CorsConfig;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Decide whether a request origin may use the API.
///
/// Requests without an `Origin` header (curl, server-to-server, same-origin)
/// are allowed; browser cross-origin requests must match one allowlisted
/// value exactly.
pub fn origin_allowed(origin: Option<&HeaderValue>, allowed: &[HeaderValue]) -> bool {
    match origin {
        None => true,
        Some(origin) => allowed.iter().any(|candidate| candidate == origin),
    }
}

/// Creates a CORS layer over the configured allowlist.
///
/// The layer only engages for requests that carry an `Origin` header, so the
/// no-origin case of [`origin_allowed`] holds by construction. Configured
/// with:
/// - the allowlisted origins from `CorsConfig`
/// - methods GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - headers Content-Type, Accept
/// - 1 hour max age
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, InvalidHeaderValue> {
    let allowed: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    let layer = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            origin_allowed(Some(origin), &allowed)
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600));

    Ok(layer)
}
