//! # Delivery cost estimation
//!
//! Estimates the cheapest way to collect an order from the warehouses
//! ("centers") that stock it and bring everything to the single delivery
//! point `L1`.
//!
//! ```
//! use delivery_cost::{NetworkModel, Order, Product, RouteSimulator};
//!
//! let network = NetworkModel::standard();
//! let order = Order::new().with(Product::A, 1);
//! assert_eq!(RouteSimulator::new(&network).calculate_min_cost(&order), 30.0);
//! ```

pub mod api;
pub mod batch;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod network;
pub mod planning;
pub mod simulation;
pub mod utils;

pub use domain::solution::{Branch, Quote};
pub use domain::types::{Center, Node, Order, Product, Stop, TripPlan};
pub use error::{Error, Result};
pub use network::NetworkModel;
pub use planning::TripPlanner;
pub use simulation::{RouteSimulator, SearchStrategy};
