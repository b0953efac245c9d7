use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "cv-api"
    }))
}

/// GET /api/health
/// Richer health document in the shape existing callers poll.
pub async fn api_health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
        "services": {
            "cvParser": "available"
        }
    }))
}
