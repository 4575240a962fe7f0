use crate::error::{AppError, Result};
use crate::models::route::{PlanRouteRequest, PlanRouteResponse, PlannedRoute};
use crate::services::maps;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /routes/plan
/// Resolve the start location, fan out candidate directions queries, and
/// return every pooled alternative with the best-matching index.
pub async fn plan_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        goal = %request.goal.kind,
        target = request.goal.target_value,
        "Plan request: {} {}",
        request.goal.target_value, request.goal.kind
    );

    let (origin, formatted_address) = match (&request.start_point, &request.start_address) {
        (Some(point), _) => (*point, None),
        (None, Some(address)) => {
            let located = state.geocoding.geocode(address).await?;
            (located.point, Some(located.formatted_address))
        }
        // validate() already rejected this shape
        (None, None) => {
            return Err(AppError::InvalidRequest(
                "either start_point or start_address is required".to_string(),
            ))
        }
    };

    let bearings = request.bearings.unwrap_or(state.default_bearing_count);
    let result = state
        .planner
        .plan(origin, &request.goal, &request.profile, bearings)
        .await?;

    let routes = result
        .alternatives
        .iter()
        .map(|alternative| PlannedRoute {
            maps_url: maps::route_link(
                &result.origin,
                &alternative.path_encoding,
                state.map_link_waypoints,
            ),
            alternative: alternative.clone(),
        })
        .collect();

    Ok(Json(PlanRouteResponse {
        request_id: result.request_id,
        origin: result.origin,
        formatted_address,
        best_index: result.best_index,
        routes,
    }))
}
