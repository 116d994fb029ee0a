use axum::Json;
use serde_json::{Value, json};

/// Index message at the API root, kept as a smoke-test target
pub async fn index() -> Json<Value> {
    Json(json!({ "msg": "Desde Api" }))
}

/// Liveness check answered with a bare string
pub async fn ping() -> &'static str {
    tracing::debug!("Pong");
    "pong"
}
