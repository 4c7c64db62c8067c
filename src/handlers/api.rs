//! Health check and status handlers.

use axum::Json;
use serde_json::{Value, json};

/// Service name reported by the status endpoints.
const SERVICE_NAME: &str = "Biographer Relay";

/// Status endpoint handler for `GET /`.
pub async fn root_status() -> Json<Value> {
    Json(json!({
        "status": "online",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Health check handler for `GET /health`, used by deployment probes.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
    }))
}
