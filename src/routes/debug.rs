use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are configured
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "checks": {
            "directions": "configured",
            "geocoding": "configured",
            "weather": if state.weather.is_some() { "configured" } else { "disabled" },
        }
    }))
}
