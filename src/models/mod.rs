pub mod coordinates;
pub mod goal;
pub mod route;

pub use coordinates::GeoPoint;
pub use goal::{Goal, GoalKind, RunnerProfile};
pub use route::{PlanningResult, RouteAlternative, RouteCandidateQuery};
