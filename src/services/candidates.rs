use crate::error::Result;
use crate::models::{GeoPoint, Goal, RouteCandidateQuery, RunnerProfile};

/// Synthesize candidate destinations around `origin` so that one-way
/// directions queries are likely to return paths near the goal's target
/// length.
///
/// Candidates sit at half the one-way target distance, projected along
/// `n_bearings` evenly spaced compass bearings starting due north. Halving
/// anticipates an out-and-back run of roughly the full target length; the
/// returned routes are not validated to actually loop back.
///
/// Output order follows ascending bearing. Coincident points (tiny targets)
/// are not deduplicated.
pub fn generate_candidates(
    origin: GeoPoint,
    goal: &Goal,
    profile: &RunnerProfile,
    n_bearings: usize,
) -> Result<Vec<GeoPoint>> {
    let target_km = goal.one_way_distance_km(profile)?;
    let half_km = target_km / 2.0;
    let step_deg = 360.0 / n_bearings as f64;

    tracing::debug!(
        target_km,
        n_bearings,
        "Projecting {} candidates at {:.2}km from origin",
        n_bearings,
        half_km
    );

    Ok((0..n_bearings)
        .map(|i| origin.destination(i as f64 * step_deg, half_km))
        .collect())
}

/// Pair each generated candidate with the origin, ready to hand to the
/// directions provider one query at a time.
pub fn candidate_queries(
    origin: GeoPoint,
    goal: &Goal,
    profile: &RunnerProfile,
    n_bearings: usize,
) -> Result<Vec<RouteCandidateQuery>> {
    Ok(generate_candidates(origin, goal, profile, n_bearings)?
        .into_iter()
        .map(|destination| RouteCandidateQuery {
            origin,
            destination,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalKind;

    fn origin() -> GeoPoint {
        GeoPoint::new(-6.2088, 106.8456).unwrap()
    }

    fn default_profile() -> RunnerProfile {
        RunnerProfile {
            weight_kg: 60.0,
            preferred_speed_kmh: 8.0,
        }
    }

    #[test]
    fn test_bearing_coverage() {
        let goal = Goal::new(GoalKind::Distance, 6.0).unwrap();

        for n in [1, 4, 8, 12] {
            let points = generate_candidates(origin(), &goal, &default_profile(), n).unwrap();
            assert_eq!(points.len(), n);
        }
    }

    /// Initial bearing from `from` to `to` (forward azimuth), degrees
    /// clockwise from true north, normalized into [0, 360).
    fn initial_bearing_deg(from: &GeoPoint, to: &GeoPoint) -> f64 {
        let phi1 = from.lat.to_radians();
        let phi2 = to.lat.to_radians();
        let delta_lon = (to.lon - from.lon).to_radians();

        let y = delta_lon.sin() * phi2.cos();
        let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lon.cos();
        y.atan2(x).to_degrees().rem_euclid(360.0)
    }

    #[test]
    fn test_bearings_evenly_spaced() {
        let goal = Goal::new(GoalKind::Distance, 6.0).unwrap();

        for n in [4, 8, 12] {
            let points = generate_candidates(origin(), &goal, &default_profile(), n).unwrap();

            for (i, point) in points.iter().enumerate() {
                let expected = i as f64 * 360.0 / n as f64;
                let measured = initial_bearing_deg(&origin(), point);
                // Compare on the circle so 359.999... matches 0
                let raw = (measured - expected).abs();
                let diff = raw.min(360.0 - raw);
                assert!(
                    diff < 1e-6,
                    "candidate {}/{}: bearing {} (expected {})",
                    i,
                    n,
                    measured,
                    expected
                );
            }
        }
    }

    #[test]
    fn test_first_candidate_is_due_north() {
        let goal = Goal::new(GoalKind::Distance, 6.0).unwrap();
        let points = generate_candidates(origin(), &goal, &default_profile(), 8).unwrap();

        assert!((points[0].lon - origin().lon).abs() < 1e-9);
        assert!(points[0].lat > origin().lat);
    }

    #[test]
    fn test_candidates_at_half_target_distance() {
        let goal = Goal::new(GoalKind::Distance, 6.0).unwrap();
        let points = generate_candidates(origin(), &goal, &default_profile(), 8).unwrap();

        for point in &points {
            let dist = origin().distance_to(point);
            let relative_error = (dist - 3.0).abs() / 3.0;
            assert!(relative_error < 0.001, "candidate at {}km", dist);
        }
    }

    #[test]
    fn test_duration_goal_uses_profile_speed() {
        // 90 minutes at 10 km/h is 15 km one-way, candidates at 7.5 km
        let goal = Goal::new(GoalKind::Duration, 90.0).unwrap();
        let profile = RunnerProfile {
            weight_kg: 60.0,
            preferred_speed_kmh: 10.0,
        };
        let points = generate_candidates(origin(), &goal, &profile, 4).unwrap();

        for point in &points {
            let dist = origin().distance_to(point);
            assert!((dist - 7.5).abs() / 7.5 < 0.001);
        }
    }

    #[test]
    fn test_longitudes_normalized_near_antimeridian() {
        let origin = GeoPoint::new(-17.7, 179.95).unwrap();
        let goal = Goal::new(GoalKind::Distance, 40.0).unwrap();
        let points = generate_candidates(origin, &goal, &default_profile(), 8).unwrap();

        for point in &points {
            assert!(
                (-180.0..180.0).contains(&point.lon),
                "longitude {} out of range",
                point.lon
            );
        }
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let goal = Goal {
            kind: GoalKind::Distance,
            target_value: 0.0,
        };
        assert!(generate_candidates(origin(), &goal, &default_profile(), 8).is_err());
    }

    #[test]
    fn test_candidate_queries_share_origin() {
        let goal = Goal::new(GoalKind::Distance, 6.0).unwrap();
        let queries = candidate_queries(origin(), &goal, &default_profile(), 4).unwrap();

        assert_eq!(queries.len(), 4);
        for query in &queries {
            assert_eq!(query.origin, origin());
            assert_ne!(query.destination, origin());
        }
    }
}
