// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use services::geocoding::GeocodingClient;
use services::planner::RoutePlanner;
use services::weather::WeatherClient;

// App state for sharing across the application
pub struct AppState {
    pub planner: RoutePlanner,
    pub geocoding: GeocodingClient,
    pub weather: Option<WeatherClient>,
    pub default_bearing_count: usize,
    pub map_link_waypoints: usize,
}
