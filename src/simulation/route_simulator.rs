use std::collections::HashSet;

use itertools::Itertools;
use tracing::{debug, info, span, trace, Level};

use crate::domain::solution::{Branch, Quote};
use crate::domain::types::{Center, Node, Order, Stop, TripPlan};
use crate::network::{tariff, NetworkModel};
use crate::planning::TripPlanner;
use crate::simulation::SearchStrategy;
use crate::utils::round_cost;

/// Position and running cost of the single delivery truck.
#[derive(Debug, Clone)]
struct Truck<'a> {
    network: &'a NetworkModel,
    location: Node,
    cost: f64,
    served: Vec<Center>,
}

impl<'a> Truck<'a> {
    fn parked_at(network: &'a NetworkModel, start: Center) -> Self {
        Self {
            network,
            location: Node::Center(start),
            cost: 0.0,
            served: Vec::new(),
        }
    }

    /// Drive empty to the stop's center (if not already there), load its
    /// products and take them to the destination.
    fn serve(&mut self, stop: &Stop) {
        let pickup = Node::Center(stop.center);
        if self.location != pickup {
            let leg = self.network.distance(self.location, pickup) * tariff::empty_rate();
            trace!("Empty leg {} -> {}: {}", self.location, pickup, leg);
            self.cost += leg;
            self.location = pickup;
        }

        let weight = self.network.load_weight(&stop.loads);
        let rate = self.network.cost_rate_per_km(weight);
        let leg = self.network.distance(self.location, Node::Destination) * rate;
        trace!(
            "Loaded leg {} -> {} ({} kg at {}/km): {}",
            self.location,
            Node::Destination,
            weight,
            rate,
            leg
        );
        self.cost += leg;
        self.location = Node::Destination;
        self.served.push(stop.center);
    }

    fn into_branch(self, start: Center) -> Branch {
        Branch {
            start,
            sequence: self.served,
            cost: self.cost,
        }
    }
}

/// Finds the cheapest way to deliver an order with the configured strategy.
#[derive(Debug, Clone, Copy)]
pub struct RouteSimulator<'a> {
    network: &'a NetworkModel,
    strategy: SearchStrategy,
}

impl<'a> RouteSimulator<'a> {
    pub fn new(network: &'a NetworkModel) -> Self {
        Self::with_strategy(network, SearchStrategy::default())
    }

    pub fn with_strategy(network: &'a NetworkModel, strategy: SearchStrategy) -> Self {
        Self { network, strategy }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    /// Minimum delivery cost for `order`, rounded to two decimals.
    ///
    /// Empty orders cost 0. Orders whose every branch needs a missing road
    /// cost infinity.
    pub fn calculate_min_cost(&self, order: &Order) -> f64 {
        self.quote(order).minimum_cost
    }

    /// Like [`calculate_min_cost`](Self::calculate_min_cost), keeping the
    /// unrounded cost of every branch that was tried.
    pub fn quote(&self, order: &Order) -> Quote {
        let quote_span = span!(Level::INFO, "quote", strategy = %self.strategy);
        let _guard = quote_span.enter();

        let plan = TripPlanner::new(self.network).build_trip_plan(order);
        let branches = match self.strategy {
            SearchStrategy::StartingCenter => self.starting_center_branches(&plan),
            SearchStrategy::Exhaustive => self.exhaustive_branches(&plan),
        };

        let minimum = if branches.is_empty() {
            0.0
        } else {
            branches
                .iter()
                .fold(f64::INFINITY, |best, branch| best.min(branch.cost))
        };

        let minimum_cost = round_cost(minimum);
        info!(
            "Order [{}]: {} branch(es), minimum cost {:.2}",
            order,
            branches.len(),
            minimum_cost
        );

        Quote {
            branches,
            minimum_cost,
        }
    }

    fn starting_center_branches(&self, plan: &TripPlan) -> Vec<Branch> {
        plan.centers()
            .map(|start| self.simulate_delivery(start, plan))
            .collect()
    }

    fn exhaustive_branches(&self, plan: &TripPlan) -> Vec<Branch> {
        plan.stops
            .iter()
            .permutations(plan.stops.len())
            .filter_map(|sequence| self.simulate_sequence(&sequence))
            .collect()
    }

    /// Cost of one strategy: the truck starts empty at `start`, then
    /// repeatedly serves the first unserved stop in plan order, driving out
    /// from the destination after every delivery.
    pub fn simulate_delivery(&self, start: Center, plan: &TripPlan) -> Branch {
        let branch_span = span!(Level::DEBUG, "simulate_delivery", start = %start);
        let _guard = branch_span.enter();

        let mut truck = Truck::parked_at(self.network, start);
        let mut visited: HashSet<Center> = HashSet::new();

        while let Some(stop) = plan.stops.iter().find(|s| !visited.contains(&s.center)) {
            truck.serve(stop);
            visited.insert(stop.center);
        }

        let branch = truck.into_branch(start);
        debug!(
            "Start {}: sequence {:?}, cost {}",
            start, branch.sequence, branch.cost
        );
        branch
    }

    // Serve the stops in exactly the given order, starting at the first
    // stop's center. An empty sequence has no start.
    fn simulate_sequence(&self, sequence: &[&Stop]) -> Option<Branch> {
        let start = sequence.first()?.center;
        let mut truck = Truck::parked_at(self.network, start);
        for stop in sequence {
            truck.serve(stop);
        }

        let branch = truck.into_branch(start);
        debug!("Sequence {:?}: cost {}", branch.sequence, branch.cost);
        Some(branch)
    }
}
