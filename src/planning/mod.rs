pub mod trip_planner;

pub use trip_planner::TripPlanner;
