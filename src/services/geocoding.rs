use crate::error::{AppError, Result};
use crate::models::GeoPoint;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const GOOGLE_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Resolved start location: the coordinates plus the provider's canonical
/// form of the address, echoed back to the user.
#[derive(Debug, Clone, Serialize)]
pub struct GeocodedLocation {
    pub point: GeoPoint,
    pub formatted_address: String,
}

#[derive(Clone)]
pub struct GeocodingClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(api_key: String) -> Self {
        GeocodingClient {
            client: Client::new(),
            api_key,
            base_url: GOOGLE_GEOCODE_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        GeocodingClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Resolve a free-text address to coordinates. An unresolvable address
    /// is terminal for the planning request, not a transient failure.
    pub async fn geocode(&self, address: &str) -> Result<GeocodedLocation> {
        tracing::debug!(address, "Geocoding request: {}", address);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::GeocodingApi(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::GeocodingApi(format!("HTTP {}", status)));
        }

        let body: GeocodeApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::GeocodingApi(format!("Failed to parse response: {}", e)))?;

        first_location(body, address)
    }
}

/// Pick the provider's top match, or fail with guidance to refine the input.
fn first_location(response: GeocodeApiResponse, address: &str) -> Result<GeocodedLocation> {
    if response.status != "OK" {
        return Err(AppError::LocationNotFound(format!(
            "could not resolve '{}'; try a more specific address",
            address
        )));
    }

    let result = response.results.into_iter().next().ok_or_else(|| {
        AppError::LocationNotFound(format!(
            "could not resolve '{}'; try a more specific address",
            address
        ))
    })?;

    let location = result.geometry.location;
    let point = GeoPoint::new(location.lat, location.lng).map_err(AppError::GeocodingApi)?;

    tracing::info!(
        lat = point.lat,
        lon = point.lon,
        "Geocoded '{}' to {}",
        address,
        result.formatted_address
    );

    Ok(GeocodedLocation {
        point,
        formatted_address: result.formatted_address,
    })
}

// Google Geocoding API response types

#[derive(Debug, Deserialize)]
struct GeocodeApiResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    formatted_address: String,
    geometry: GeocodeGeometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: ApiLatLng,
}

#[derive(Debug, Deserialize)]
struct ApiLatLng {
    lat: f64,
    lng: f64,
}
