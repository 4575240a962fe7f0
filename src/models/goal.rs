use crate::constants::{
    CALORIES_PER_KG_KM, DEFAULT_SPEED_KMH, DEFAULT_WEIGHT_KG, MAX_SPEED_KMH, MAX_WEIGHT_KG,
    MIN_SPEED_KMH, MIN_WEIGHT_KG,
};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the runner is trying to hit: a distance, a time on feet, or a
/// calorie burn. Everything else is converted through the runner profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    #[default]
    #[serde(alias = "km")]
    Distance,
    #[serde(alias = "minutes", alias = "time")]
    Duration,
    #[serde(alias = "kcal")]
    Calories,
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalKind::Distance => write!(f, "distance"),
            GoalKind::Duration => write!(f, "duration"),
            GoalKind::Calories => write!(f, "calories"),
        }
    }
}

impl FromStr for GoalKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" | "km" => Ok(GoalKind::Distance),
            "duration" | "minutes" | "time" => Ok(GoalKind::Duration),
            "calories" | "kcal" => Ok(GoalKind::Calories),
            _ => Err(format!("Invalid goal kind: '{}'", s)),
        }
    }
}

/// The fitness goal for one planning request. Units of `target_value`
/// depend on `kind`: km, minutes, or kcal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub kind: GoalKind,
    pub target_value: f64,
}

impl Goal {
    pub fn new(kind: GoalKind, target_value: f64) -> Result<Self> {
        let goal = Goal { kind, target_value };
        goal.validate().map_err(AppError::InvalidGoal)?;
        Ok(goal)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.target_value.is_finite() || self.target_value <= 0.0 {
            return Err(format!(
                "target_value must be positive, got {}",
                self.target_value
            ));
        }
        Ok(())
    }

    /// Convert the goal into the one-way distance (km) that a directions
    /// query should aim for, using the runner's profile for unit conversion.
    pub fn one_way_distance_km(&self, profile: &RunnerProfile) -> Result<f64> {
        self.validate().map_err(AppError::InvalidGoal)?;

        match self.kind {
            GoalKind::Distance => Ok(self.target_value),
            GoalKind::Duration => {
                if profile.preferred_speed_kmh <= 0.0 {
                    return Err(AppError::InvalidGoal(format!(
                        "preferred_speed_kmh must be positive, got {}",
                        profile.preferred_speed_kmh
                    )));
                }
                Ok(self.target_value / 60.0 * profile.preferred_speed_kmh)
            }
            GoalKind::Calories => {
                if profile.weight_kg <= 0.0 {
                    return Err(AppError::InvalidGoal(format!(
                        "weight_kg must be positive, got {}",
                        profile.weight_kg
                    )));
                }
                Ok(self.target_value / (profile.weight_kg * CALORIES_PER_KG_KM))
            }
        }
    }
}

/// Per-runner figures used to convert between distance, duration, and
/// calorie units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RunnerProfile {
    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,
    #[serde(default = "default_speed_kmh")]
    pub preferred_speed_kmh: f64,
}

fn default_weight_kg() -> f64 {
    DEFAULT_WEIGHT_KG
}

fn default_speed_kmh() -> f64 {
    DEFAULT_SPEED_KMH
}

impl Default for RunnerProfile {
    fn default() -> Self {
        RunnerProfile {
            weight_kg: default_weight_kg(),
            preferred_speed_kmh: default_speed_kmh(),
        }
    }
}

impl RunnerProfile {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(format!(
                "weight_kg must be between {} and {}",
                MIN_WEIGHT_KG, MAX_WEIGHT_KG
            ));
        }
        if !(MIN_SPEED_KMH..=MAX_SPEED_KMH).contains(&self.preferred_speed_kmh) {
            return Err(format!(
                "preferred_speed_kmh must be between {} and {}",
                MIN_SPEED_KMH, MAX_SPEED_KMH
            ));
        }
        Ok(())
    }

    /// Estimated calorie burn for a run of `distance_km`.
    pub fn calories_for(&self, distance_km: f64) -> f64 {
        distance_km * self.weight_kg * CALORIES_PER_KG_KM
    }

    /// Estimated time (minutes) to cover `distance_km` at the preferred speed.
    pub fn minutes_for(&self, distance_km: f64) -> f64 {
        distance_km / self.preferred_speed_kmh * 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(weight_kg: f64, speed_kmh: f64) -> RunnerProfile {
        RunnerProfile {
            weight_kg,
            preferred_speed_kmh: speed_kmh,
        }
    }

    #[test]
    fn test_goal_kind_from_str() {
        assert_eq!("distance".parse::<GoalKind>().unwrap(), GoalKind::Distance);
        assert_eq!("DURATION".parse::<GoalKind>().unwrap(), GoalKind::Duration);
        assert_eq!("kcal".parse::<GoalKind>().unwrap(), GoalKind::Calories);
        assert!("steps".parse::<GoalKind>().is_err());
    }

    #[test]
    fn test_goal_kind_deserializes_aliases() {
        // Requests may use the unit name instead of the goal kind
        for (input, expected) in [
            ("\"distance\"", GoalKind::Distance),
            ("\"km\"", GoalKind::Distance),
            ("\"duration\"", GoalKind::Duration),
            ("\"minutes\"", GoalKind::Duration),
            ("\"calories\"", GoalKind::Calories),
            ("\"kcal\"", GoalKind::Calories),
        ] {
            let kind: GoalKind = serde_json::from_str(input).unwrap();
            assert_eq!(kind, expected, "input {}", input);
        }

        assert!(serde_json::from_str::<GoalKind>("\"steps\"").is_err());
    }

    #[test]
    fn test_goal_kind_display() {
        assert_eq!(GoalKind::Distance.to_string(), "distance");
        assert_eq!(GoalKind::Duration.to_string(), "duration");
        assert_eq!(GoalKind::Calories.to_string(), "calories");
    }

    #[test]
    fn test_goal_rejects_non_positive_target() {
        assert!(Goal::new(GoalKind::Distance, 0.0).is_err());
        assert!(Goal::new(GoalKind::Distance, -5.0).is_err());
        assert!(Goal::new(GoalKind::Distance, f64::NAN).is_err());
        assert!(Goal::new(GoalKind::Distance, 5.0).is_ok());
    }

    #[test]
    fn test_distance_goal_is_identity() {
        let goal = Goal::new(GoalKind::Distance, 7.5).unwrap();
        let km = goal.one_way_distance_km(&RunnerProfile::default()).unwrap();
        assert_eq!(km, 7.5);
    }

    #[test]
    fn test_duration_goal_conversion() {
        // 60 minutes at 10 km/h is 10 km
        let goal = Goal::new(GoalKind::Duration, 60.0).unwrap();
        let km = goal.one_way_distance_km(&profile(60.0, 10.0)).unwrap();
        assert!((km - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_duration_conversion_invertible() {
        let p = profile(70.0, 9.5);
        let goal = Goal::new(GoalKind::Duration, 42.0).unwrap();
        let km = goal.one_way_distance_km(&p).unwrap();
        // Time-from-distance at the same speed recovers the target
        assert!((p.minutes_for(km) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn test_calories_goal_conversion() {
        let p = profile(60.0, 8.0);
        let goal = Goal::new(GoalKind::Calories, 300.0).unwrap();
        let km = goal.one_way_distance_km(&p).unwrap();
        assert!((p.calories_for(km) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_profile_values_for_conversion() {
        let goal = Goal::new(GoalKind::Duration, 30.0).unwrap();
        assert!(goal.one_way_distance_km(&profile(60.0, 0.0)).is_err());

        let goal = Goal::new(GoalKind::Calories, 300.0).unwrap();
        assert!(goal.one_way_distance_km(&profile(0.0, 8.0)).is_err());
    }

    #[test]
    fn test_profile_validation_bounds() {
        assert!(RunnerProfile::default().validate().is_ok());
        assert!(profile(29.0, 8.0).validate().is_err());
        assert!(profile(151.0, 8.0).validate().is_err());
        assert!(profile(60.0, 4.0).validate().is_err());
        assert!(profile(60.0, 16.0).validate().is_err());
    }
}
