pub mod metadata;

use axum::{http::StatusCode, Json};
use chrono::Utc;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "service": "devtools-server",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}

/// Fallback for unmatched routes. Keeps the error surface JSON all the way
/// down instead of axum's default empty 404.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Not Found", "status": 404 })),
    )
}
