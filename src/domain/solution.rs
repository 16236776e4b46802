use crate::domain::types::Center;

/// Cost of one simulated visiting strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// Where the truck starts out empty.
    pub start: Center,
    /// Centers in the order they were served.
    pub sequence: Vec<Center>,
    pub cost: f64,
}

impl Branch {
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }
}

/// Outcome of a cost calculation: every branch tried and the rounded minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub branches: Vec<Branch>,
    pub minimum_cost: f64,
}

impl Quote {
    /// The first branch that reached the minimum.
    pub fn best(&self) -> Option<&Branch> {
        self.branches
            .iter()
            .min_by(|a, b| a.cost.total_cmp(&b.cost))
    }
}
