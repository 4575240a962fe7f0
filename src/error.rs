use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("No routes found: {0}")]
    NoRoutes(String),

    #[error("Geocoding API error: {0}")]
    GeocodingApi(String),

    #[error("Directions API error: {0}")]
    DirectionsApi(String),

    #[error("Weather API error: {0}")]
    WeatherApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidGoal(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::InvalidRequest(ref e) => (StatusCode::BAD_REQUEST, e.as_str()),
            AppError::LocationNotFound(ref e) => {
                tracing::info!("Location not found: {}", e);
                (StatusCode::NOT_FOUND, e.as_str())
            }
            AppError::NoRoutes(ref e) => {
                tracing::info!("No routes found: {}", e);
                (StatusCode::NOT_FOUND, e.as_str())
            }
            AppError::GeocodingApi(ref e) => {
                tracing::error!("Geocoding API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Geocoding service error")
            }
            AppError::DirectionsApi(ref e) => {
                tracing::error!("Directions API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Routing service error")
            }
            AppError::WeatherApi(ref e) => {
                tracing::warn!("Weather API error: {}", e);
                (StatusCode::BAD_GATEWAY, "Weather service error")
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": status.canonical_reason().unwrap_or("Unknown error"),
            "message": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
