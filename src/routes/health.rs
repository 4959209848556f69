use axum::Json;
use serde_json::{json, Value};

/// GET /health - Liveness check
pub async fn health_check() -> Json<Value> {
    Json(json!({ "ok": true }))
}
