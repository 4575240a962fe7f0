//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change. For
//! per-deployment tuning knobs, see [`PlannerConfig`](crate::config::PlannerConfig).

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Physical model ---

/// Mean Earth radius (km) for spherical distance and forward projection.
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Calories burned per kilogram of body weight per kilometer run.
/// Calorie figures are always derived from this coefficient, never taken
/// from an external provider.
pub const CALORIES_PER_KG_KM: f64 = 1.036;

// --- Candidate generation ---

/// Default number of evenly spaced compass bearings per planning request.
/// Overridden by `PLANNER_BEARING_COUNT`.
pub const DEFAULT_BEARING_COUNT: usize = 8;
/// Hard upper bound on bearings per request. Each bearing costs one
/// directions query against the external provider.
pub const MAX_BEARING_COUNT: usize = 32;

// --- Ranking ---

/// Weight of the duration tie-break term added to each route's primary
/// deviation. Bounded by `max_duration_min * 0.01`, so it only discriminates
/// between near-equal primary matches.
pub const DURATION_TIE_BREAK_WEIGHT: f64 = 0.01;

// --- Runner profile bounds ---

/// Minimum accepted runner weight (kg).
pub const MIN_WEIGHT_KG: f64 = 30.0;
/// Maximum accepted runner weight (kg).
pub const MAX_WEIGHT_KG: f64 = 150.0;
/// Minimum accepted preferred running speed (km/h).
pub const MIN_SPEED_KMH: f64 = 5.0;
/// Maximum accepted preferred running speed (km/h).
pub const MAX_SPEED_KMH: f64 = 15.0;
/// Default runner weight when a request omits the profile.
pub const DEFAULT_WEIGHT_KG: f64 = 60.0;
/// Default preferred speed when a request omits the profile.
pub const DEFAULT_SPEED_KMH: f64 = 8.0;

// --- External map links ---

/// Default number of waypoints sampled from a decoded path when building an
/// external map link. Overridden by `PLANNER_MAP_LINK_WAYPOINTS`.
pub const DEFAULT_MAP_LINK_WAYPOINTS: usize = 5;
