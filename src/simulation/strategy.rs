use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How visiting sequences are enumerated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Try each planned center as the truck's starting point, then serve
    /// the plan in its fixed order. Matches the published price list.
    #[default]
    StartingCenter,
    /// Try every ordering of the planned centers. Never more expensive than
    /// `StartingCenter`, but can quote lower prices for multi-center orders.
    Exhaustive,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::StartingCenter => f.write_str("starting-center"),
            SearchStrategy::Exhaustive => f.write_str("exhaustive"),
        }
    }
}

impl FromStr for SearchStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starting-center" | "starting_center" | "heuristic" => {
                Ok(SearchStrategy::StartingCenter)
            }
            "exhaustive" | "permutations" => Ok(SearchStrategy::Exhaustive),
            other => Err(Error::Config(format!("unknown search strategy '{other}'"))),
        }
    }
}
