use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wonderrun::error::Result;
use wonderrun::models::GeoPoint;
use wonderrun::services::directions::{DirectionsProvider, ProviderRoute};
use wonderrun::services::geocoding::GeocodingClient;
use wonderrun::services::planner::RoutePlanner;
use wonderrun::AppState;

/// Directions stub that answers candidate queries from a canned script,
/// one entry per query in dispatch order. Once the script runs out, every
/// further query returns no alternatives.
pub struct StubDirections {
    responses: Mutex<VecDeque<Result<Vec<ProviderRoute>>>>,
}

#[allow(dead_code)]
impl StubDirections {
    pub fn new(responses: Vec<Result<Vec<ProviderRoute>>>) -> Self {
        StubDirections {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait]
impl DirectionsProvider for StubDirections {
    async fn route_alternatives(
        &self,
        _origin: &GeoPoint,
        _destination: &GeoPoint,
    ) -> Result<Vec<ProviderRoute>> {
        self.responses
            .lock()
            .expect("stub mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Build a provider route with the given totals and a recognizable summary.
#[allow(dead_code)]
pub fn provider_route(distance_m: f64, duration_s: f64, summary: &str) -> ProviderRoute {
    ProviderRoute {
        distance_m,
        duration_s,
        path_encoding: String::new(),
        summary: summary.to_string(),
    }
}

/// Assemble an application router backed by a scripted directions stub.
/// The geocoding client is never reached when requests carry an explicit
/// start point.
#[allow(dead_code)]
pub fn test_app(stub: StubDirections, default_bearing_count: usize) -> axum::Router {
    let planner = RoutePlanner::new(Arc::new(stub));
    let state = Arc::new(AppState {
        planner,
        geocoding: GeocodingClient::new("test-key".to_string()),
        weather: None,
        default_bearing_count,
        map_link_waypoints: 5,
    });

    wonderrun::routes::create_router(state)
}
