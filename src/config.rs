use std::env;
use std::net::SocketAddr;

use dotenv::dotenv;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::simulation::SearchStrategy;

pub mod constant {
    use crate::domain::types::{Center, Node, Product};

    /// Per-km rate while the truck carries no more than `WEIGHT_THRESHOLD`.
    pub(crate) const BASE_RATE: f64 = 10.0;
    /// Added to the rate for every started `WEIGHT_INCREMENT` above the threshold.
    pub(crate) const RATE_STEP: f64 = 8.0;
    pub(crate) const WEIGHT_THRESHOLD: f64 = 5.0;
    pub(crate) const WEIGHT_INCREMENT: f64 = 5.0;

    pub(crate) const COST_DECIMALS: usize = 2;
    pub(crate) const SEED: u64 = 64;
    pub(crate) const MAX_SAMPLE_QUANTITY: i64 = 4;
    pub(crate) const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

    pub(crate) const PRODUCT_WEIGHTS: [(Product, f64); 9] = [
        (Product::A, 3.0),
        (Product::B, 2.0),
        (Product::C, 8.0),
        (Product::D, 12.0),
        (Product::E, 25.0),
        (Product::F, 15.0),
        (Product::G, 0.5),
        (Product::H, 1.0),
        (Product::I, 2.0),
    ];

    pub(crate) const CENTER_STOCK: [(Center, [Product; 3]); 3] = [
        (Center::C1, [Product::A, Product::B, Product::C]),
        (Center::C2, [Product::D, Product::E, Product::F]),
        (Center::C3, [Product::G, Product::H, Product::I]),
    ];

    // C1-C3 has no direct road.
    pub(crate) const EDGES: [(Node, Node, f64); 5] = [
        (Node::Center(Center::C1), Node::Center(Center::C2), 4.0),
        (Node::Center(Center::C1), Node::Destination, 3.0),
        (Node::Center(Center::C2), Node::Destination, 2.5),
        (Node::Center(Center::C2), Node::Center(Center::C3), 3.0),
        (Node::Center(Center::C3), Node::Destination, 2.0),
    ];
}

/// Runtime settings for the binary, read from the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: SocketAddr,
    pub search: SearchStrategy,
    pub strict_orders: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: constant::DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8000))),
            search: SearchStrategy::StartingCenter,
            strict_orders: false,
        }
    }
}

impl Settings {
    /// Load `.env` (if any) and read `DELIVERY_BIND_ADDR`, `DELIVERY_SEARCH`
    /// and `DELIVERY_STRICT_ORDERS`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = lookup("DELIVERY_BIND_ADDR") {
            settings.bind_addr = raw.trim().parse().map_err(|_| {
                Error::Config(format!("DELIVERY_BIND_ADDR is not a socket address: {raw}"))
            })?;
        }

        if let Some(raw) = lookup("DELIVERY_SEARCH") {
            settings.search = raw.trim().parse()?;
        }

        if let Some(raw) = lookup("DELIVERY_STRICT_ORDERS") {
            settings.strict_orders = match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" | "" => false,
                other => {
                    return Err(Error::Config(format!(
                        "DELIVERY_STRICT_ORDERS must be a boolean, got '{other}'"
                    )))
                }
            };
        }

        debug!("Resolved settings: {:?}", settings);
        info!(
            "Search strategy '{}', strict orders {}",
            settings.search, settings.strict_orders
        );
        Ok(settings)
    }
}
