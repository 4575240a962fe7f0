use crate::constants::DURATION_TIE_BREAK_WEIGHT;
use crate::error::{AppError, Result};
use crate::models::{Goal, GoalKind, RouteAlternative};

/// Score one route against the goal. Lower is better.
///
/// The primary key is the absolute deviation of the goal's own metric from
/// its target. The secondary term scales with duration so that near-equal
/// primary matches resolve toward the shorter run without a clearly better
/// primary match ever being overturned.
fn fitness_score(route: &RouteAlternative, goal: &Goal) -> f64 {
    let deviation = match goal.kind {
        GoalKind::Distance => (route.distance_km - goal.target_value).abs(),
        GoalKind::Duration => (route.duration_min - goal.target_value).abs(),
        GoalKind::Calories => (route.calories - goal.target_value).abs(),
    };

    deviation + route.duration_min * DURATION_TIE_BREAK_WEIGHT
}

/// Select the best-matching route from the pooled alternatives.
///
/// Returns the index of the minimum score. Exact ties resolve to the first
/// occurrence, so repeated calls on identical input select the same route.
pub fn rank(routes: &[RouteAlternative], goal: &Goal) -> Result<usize> {
    if routes.is_empty() {
        return Err(AppError::NoRoutes(
            "every candidate query failed or returned no alternatives".to_string(),
        ));
    }

    let mut best_index = 0;
    let mut best_score = fitness_score(&routes[0], goal);

    for (index, route) in routes.iter().enumerate().skip(1) {
        let score = fitness_score(route, goal);
        if score < best_score {
            best_index = index;
            best_score = score;
        }
    }

    tracing::debug!(
        pool = routes.len(),
        best_index,
        best_score,
        "Ranked {} alternatives",
        routes.len()
    );

    Ok(best_index)
}
