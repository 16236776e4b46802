pub mod route_simulator;
pub mod strategy;

pub use route_simulator::RouteSimulator;
pub use strategy::SearchStrategy;
