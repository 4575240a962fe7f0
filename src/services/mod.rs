pub mod candidates;
pub mod directions;
pub mod geocoding;
pub mod maps;
pub mod planner;
pub mod ranking;
pub mod weather;
