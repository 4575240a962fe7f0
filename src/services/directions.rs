use crate::error::{AppError, Result};
use crate::models::GeoPoint;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const GOOGLE_DIRECTIONS_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// One path returned by the directions provider for a single
/// origin→destination query, reduced to the totals the planner needs.
#[derive(Debug, Clone)]
pub struct ProviderRoute {
    pub distance_m: f64,
    pub duration_s: f64,
    pub path_encoding: String,
    pub summary: String,
}

/// Seam between the planner and the external routing service.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// All alternatives for one origin→destination query. An empty list is
    /// a valid answer; errors are reserved for transport-level failures.
    async fn route_alternatives(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<Vec<ProviderRoute>>;
}

#[derive(Clone)]
pub struct GoogleDirectionsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleDirectionsClient {
    pub fn new(api_key: String) -> Self {
        GoogleDirectionsClient {
            client: Client::new(),
            api_key,
            base_url: GOOGLE_DIRECTIONS_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        GoogleDirectionsClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl DirectionsProvider for GoogleDirectionsClient {
    async fn route_alternatives(
        &self,
        origin: &GeoPoint,
        destination: &GeoPoint,
    ) -> Result<Vec<ProviderRoute>> {
        let origin_str = format!("{},{}", origin.lat, origin.lon);
        let destination_str = format!("{},{}", destination.lat, destination.lon);

        tracing::debug!(
            origin = %origin_str,
            destination = %destination_str,
            "Directions request: {} -> {}",
            origin_str, destination_str
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("origin", origin_str.as_str()),
                ("destination", destination_str.as_str()),
                // Walking is the closest profile to running
                ("mode", "walking"),
                ("alternatives", "true"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::DirectionsApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                status = %status,
                "Directions API HTTP error {}: {}",
                status, error_text
            );
            return Err(AppError::DirectionsApi(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let directions: DirectionsApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::DirectionsApi(format!("Failed to parse response: {}", e)))?;

        Ok(parse_directions_response(directions))
    }
}

// Google Directions API response types

#[derive(Debug, Deserialize)]
struct DirectionsApiResponse {
    status: String,
    #[serde(default)]
    routes: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
struct ApiRoute {
    #[serde(default)]
    legs: Vec<ApiLeg>,
    #[serde(default)]
    overview_polyline: ApiPolyline,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Deserialize, Default)]
struct ApiPolyline {
    #[serde(default)]
    points: String,
}

#[derive(Debug, Deserialize)]
struct ApiLeg {
    #[serde(default)]
    distance: ApiValue,
    #[serde(default)]
    duration: ApiValue,
}

#[derive(Debug, Deserialize, Default)]
struct ApiValue {
    #[serde(default)]
    value: f64,
}

/// Reduce a provider response to route totals. Distance and duration are
/// summed across all legs. A non-`OK` status (`ZERO_RESULTS`, quota errors)
/// parses to an empty list, so the candidate simply contributes nothing.
fn parse_directions_response(response: DirectionsApiResponse) -> Vec<ProviderRoute> {
    if response.status != "OK" {
        if response.status != "ZERO_RESULTS" {
            tracing::warn!(status = %response.status, "Directions API status: {}", response.status);
        }
        return Vec::new();
    }

    response
        .routes
        .into_iter()
        .map(|route| ProviderRoute {
            distance_m: route.legs.iter().map(|leg| leg.distance.value).sum(),
            duration_s: route.legs.iter().map(|leg| leg.duration.value).sum(),
            path_encoding: route.overview_polyline.points,
            summary: route.summary,
        })
        .collect()
}
