use crate::error::{AppError, Result};
use crate::models::GeoPoint;
use crate::services::weather::WeatherReport;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// GET /weather?city=... or /weather?lat=..&lon=..
/// Current conditions at the start location; informational only.
pub async fn current_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>> {
    let client = state.weather.as_ref().ok_or_else(|| {
        AppError::InvalidRequest("weather lookups are not configured on this server".to_string())
    })?;

    match (query.city, query.lat, query.lon) {
        (Some(city), _, _) => Ok(Json(client.current_by_city(&city).await?)),
        (None, Some(lat), Some(lon)) => {
            let point = GeoPoint::new(lat, lon).map_err(AppError::InvalidRequest)?;
            Ok(Json(client.current_at(&point).await?))
        }
        _ => Err(AppError::InvalidRequest(
            "provide either city or both lat and lon".to_string(),
        )),
    }
}
