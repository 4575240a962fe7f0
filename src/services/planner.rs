use crate::error::{AppError, Result};
use crate::models::{GeoPoint, Goal, PlanningResult, RouteAlternative, RunnerProfile};
use crate::services::{candidates, ranking};
use crate::services::directions::DirectionsProvider;
use futures::future::join_all;
use std::sync::Arc;
use uuid::Uuid;

/// Orchestrates one planning request: fan out a directions query per
/// candidate destination, pool every returned alternative, and rank the
/// pool against the goal. Stateless between requests.
pub struct RoutePlanner {
    directions: Arc<dyn DirectionsProvider>,
}

impl RoutePlanner {
    pub fn new(directions: Arc<dyn DirectionsProvider>) -> Self {
        RoutePlanner { directions }
    }

    /// Plan the best-matching run from `origin`.
    ///
    /// Candidate queries are dispatched concurrently. A failed query
    /// contributes no alternatives rather than failing the request; only a
    /// fully empty pool escalates to an error.
    pub async fn plan(
        &self,
        origin: GeoPoint,
        goal: &Goal,
        profile: &RunnerProfile,
        n_bearings: usize,
    ) -> Result<PlanningResult> {
        let queries = candidates::candidate_queries(origin, goal, profile, n_bearings)?;

        tracing::info!(
            lat = origin.lat,
            lon = origin.lon,
            goal = %goal.kind,
            target = goal.target_value,
            candidates = queries.len(),
            "Planning run from ({:.4}, {:.4}): {} {} across {} candidates",
            origin.lat, origin.lon, goal.target_value, goal.kind, queries.len()
        );

        let outcomes = join_all(queries.iter().map(|query| {
            self.directions
                .route_alternatives(&query.origin, &query.destination)
        }))
        .await;

        let mut alternatives: Vec<RouteAlternative> = Vec::new();
        let mut failed_candidates = 0usize;

        for (candidate_index, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Ok(routes) => {
                    for (alternative_index, route) in routes.into_iter().enumerate() {
                        alternatives.push(RouteAlternative::from_provider(
                            candidate_index,
                            alternative_index,
                            route.distance_m,
                            route.duration_s,
                            profile,
                            route.path_encoding,
                            route.summary,
                        ));
                    }
                }
                Err(e) => {
                    failed_candidates += 1;
                    tracing::warn!(
                        candidate_index,
                        "Candidate {} query failed: {}",
                        candidate_index,
                        e
                    );
                }
            }
        }

        if failed_candidates > 0 {
            tracing::warn!(
                failed_candidates,
                pooled = alternatives.len(),
                "{} of {} candidate queries failed; ranking {} pooled alternatives",
                failed_candidates,
                n_bearings,
                alternatives.len()
            );
        }

        let best_index = ranking::rank(&alternatives, goal).map_err(|e| match e {
            AppError::NoRoutes(_) => AppError::NoRoutes(format!(
                "no routes near ({:.4}, {:.4}); try a different start location or more bearings",
                origin.lat, origin.lon
            )),
            other => other,
        })?;

        let best = &alternatives[best_index];
        tracing::info!(
            best_index,
            distance_km = best.distance_km,
            duration_min = best.duration_min,
            "Best match: {:.2}km, {:.0}min, {:.0}kcal",
            best.distance_km,
            best.duration_min,
            best.calories
        );

        Ok(PlanningResult {
            request_id: Uuid::new_v4(),
            origin,
            best_index,
            alternatives,
        })
    }
}
