pub mod debug;
pub mod plan;
pub mod weather;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes/plan", post(plan::plan_route))
        .route("/weather", get(weather::current_weather))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
