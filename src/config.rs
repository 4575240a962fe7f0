use crate::constants::*;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub google_maps_api_key: String,
    /// Optional; the weather endpoint is disabled when absent.
    pub openweather_api_key: Option<String>,
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of evenly spaced compass bearings to fan candidate queries
    /// out on when a request does not specify its own count.
    pub bearing_count: usize,

    /// Waypoints sampled from a decoded path when building external map links.
    pub map_link_waypoints: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            bearing_count: DEFAULT_BEARING_COUNT,
            map_link_waypoints: DEFAULT_MAP_LINK_WAYPOINTS,
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let bearing_count: usize = env::var("PLANNER_BEARING_COUNT")
            .unwrap_or_else(|_| defaults.bearing_count.to_string())
            .parse()
            .map_err(|_| "Invalid PLANNER_BEARING_COUNT")?;

        if bearing_count == 0 || bearing_count > MAX_BEARING_COUNT {
            return Err(format!(
                "PLANNER_BEARING_COUNT must be between 1 and {}",
                MAX_BEARING_COUNT
            ));
        }

        Ok(Self {
            bearing_count,
            map_link_waypoints: env::var("PLANNER_MAP_LINK_WAYPOINTS")
                .unwrap_or_else(|_| defaults.map_link_waypoints.to_string())
                .parse()
                .map_err(|_| "Invalid PLANNER_MAP_LINK_WAYPOINTS")?,
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            google_maps_api_key: env::var("GOOGLE_MAPS_API_KEY")
                .map_err(|_| "GOOGLE_MAPS_API_KEY must be set")?,
            openweather_api_key: env::var("OPENWEATHER_API_KEY").ok(),
            planner: PlannerConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
