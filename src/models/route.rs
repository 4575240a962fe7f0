use crate::constants::MAX_BEARING_COUNT;
use crate::models::{GeoPoint, Goal, RunnerProfile};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One origin→destination query issued to the directions provider.
/// Ephemeral: produced by the candidate generator, consumed by the planner.
#[derive(Debug, Clone, Copy)]
pub struct RouteCandidateQuery {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
}

/// One path returned by the directions provider, in the units the ranker
/// works with. Identity within a planning request is the
/// `(candidate_index, alternative_index)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteAlternative {
    /// Which candidate destination this route answered (dense, 0-based).
    pub candidate_index: usize,
    /// Position among the provider's alternatives for that candidate.
    pub alternative_index: usize,
    pub distance_km: f64,
    pub duration_min: f64,
    pub calories: f64,
    /// Encoded overview polyline from the provider; treated as opaque here.
    pub path_encoding: String,
    pub summary: String,
}

impl RouteAlternative {
    /// Build from raw provider totals (meters, seconds). Calories are always
    /// derived from distance and runner weight, never provider-supplied.
    pub fn from_provider(
        candidate_index: usize,
        alternative_index: usize,
        distance_m: f64,
        duration_s: f64,
        profile: &RunnerProfile,
        path_encoding: String,
        summary: String,
    ) -> Self {
        let distance_km = distance_m / 1000.0;
        RouteAlternative {
            candidate_index,
            alternative_index,
            distance_km,
            duration_min: duration_s / 60.0,
            calories: profile.calories_for(distance_km),
            path_encoding,
            summary,
        }
    }
}

/// Immutable outcome of one planning request. Returned to the caller and
/// discarded afterwards; the planner keeps no state between requests.
#[derive(Debug, Clone, Serialize)]
pub struct PlanningResult {
    pub request_id: Uuid,
    pub origin: GeoPoint,
    /// Index into `alternatives` of the best-matching route.
    pub best_index: usize,
    pub alternatives: Vec<RouteAlternative>,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Free-text start address, resolved through the geocoder.
    pub start_address: Option<String>,
    /// Explicit start point; takes precedence over `start_address`.
    pub start_point: Option<GeoPoint>,
    pub goal: Goal,
    #[serde(default)]
    pub profile: RunnerProfile,
    /// Candidate bearings to fan out on; server default when absent.
    pub bearings: Option<usize>,
}

impl PlanRouteRequest {
    pub fn validate(&self) -> Result<(), String> {
        match (&self.start_point, &self.start_address) {
            (None, None) => {
                return Err("either start_point or start_address is required".to_string())
            }
            (None, Some(address)) if address.trim().is_empty() => {
                return Err("start_address must not be empty".to_string())
            }
            (Some(point), _) => {
                GeoPoint::new(point.lat, point.lon)?;
            }
            _ => {}
        }

        self.goal.validate()?;
        self.profile.validate()?;

        if let Some(bearings) = self.bearings {
            if bearings == 0 || bearings > MAX_BEARING_COUNT {
                return Err(format!(
                    "bearings must be between 1 and {}",
                    MAX_BEARING_COUNT
                ));
            }
        }

        Ok(())
    }
}

/// A ranked alternative plus the external map link built for it.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedRoute {
    #[serde(flatten)]
    pub alternative: RouteAlternative,
    pub maps_url: String,
}

#[derive(Debug, Serialize)]
pub struct PlanRouteResponse {
    pub request_id: Uuid,
    pub origin: GeoPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    pub best_index: usize,
    pub routes: Vec<PlannedRoute>,
}
