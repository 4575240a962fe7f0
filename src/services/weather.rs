use crate::error::{AppError, Result};
use crate::models::GeoPoint;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Ambient conditions at a location. Informational only; weather never
/// influences candidate generation or ranking.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub name: String,
    pub temp_c: f64,
    pub humidity_pct: f64,
    pub condition: String,
}

#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        WeatherClient {
            client: Client::new(),
            api_key,
            base_url: OPENWEATHER_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        WeatherClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    pub async fn current_by_city(&self, city: &str) -> Result<WeatherReport> {
        self.fetch(&[("q", city)]).await
    }

    pub async fn current_at(&self, point: &GeoPoint) -> Result<WeatherReport> {
        let lat = point.lat.to_string();
        let lon = point.lon.to_string();
        self.fetch(&[("lat", lat.as_str()), ("lon", lon.as_str())])
            .await
    }

    async fn fetch(&self, location_params: &[(&str, &str)]) -> Result<WeatherReport> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .query(location_params)
            .send()
            .await
            .map_err(|e| AppError::WeatherApi(format!("Request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::LocationNotFound(
                "city not found; check the spelling or use coordinates".to_string(),
            ));
        }

        if !response.status().is_success() {
            return Err(AppError::WeatherApi(format!("HTTP {}", response.status())));
        }

        let body: OwmApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::WeatherApi(format!("Failed to parse response: {}", e)))?;

        Ok(report_from(body))
    }
}

fn report_from(body: OwmApiResponse) -> WeatherReport {
    WeatherReport {
        name: body.name,
        temp_c: body.main.temp,
        humidity_pct: body.main.humidity,
        condition: body
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .unwrap_or_default(),
    }
}

// OpenWeatherMap response types

#[derive(Debug, Deserialize)]
struct OwmApiResponse {
    #[serde(default)]
    name: String,
    main: OwmMain,
    #[serde(default)]
    weather: Vec<OwmCondition>,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    #[serde(default)]
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwmCondition {
    #[serde(default)]
    main: String,
}
