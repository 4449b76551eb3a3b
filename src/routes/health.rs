use axum::Json;
use serde_json::{json, Value};

// Reports process liveness only; the storage backend is deliberately not
// probed here.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "HopeBridge API is running",
    }))
}
