use axum::{Router, routing::get};

pub mod health;
pub mod products;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Domain routers receive their state here; the returned router is
/// stateless from the caller's point of view.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        .nest("/products", products::router(state))
}

/// Creates the top-level router with the `/ping` liveness route.
pub fn ping_router() -> Router {
    Router::new().route("/ping", get(health::ping))
}
