use std::collections::HashMap;

use tracing::{debug, trace};

use crate::config::constant::{CENTER_STOCK, EDGES, PRODUCT_WEIGHTS};
use crate::domain::types::{Center, Node, Product};
use crate::error::{Error, Result};
use crate::network::tariff;

/// Static delivery network: unit weights, which center stocks what, and the
/// road graph between centers and the destination.
///
/// Built once and only read afterwards; share it behind an `Arc` when more
/// than one caller needs it.
#[derive(Debug, Clone)]
pub struct NetworkModel {
    weights: HashMap<Product, f64>,
    stock: Vec<(Center, Vec<Product>)>,
    edges: HashMap<(Node, Node), f64>,
}

impl Default for NetworkModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl NetworkModel {
    /// The fixed three-center network served by the estimator.
    pub fn standard() -> Self {
        Self {
            weights: PRODUCT_WEIGHTS.into_iter().collect(),
            stock: CENTER_STOCK
                .into_iter()
                .map(|(center, products)| (center, products.to_vec()))
                .collect(),
            edges: EDGES
                .into_iter()
                .map(|(from, to, km)| ((from, to), km))
                .collect(),
        }
    }

    /// Build and validate a custom network.
    ///
    /// A product may be left unstocked (orders for it are dropped), but it
    /// may not be stocked by two centers, and every stocked product needs a
    /// positive finite weight. Distances must be finite and non-negative.
    pub fn new<W, S, E>(weights: W, stock: S, edges: E) -> Result<Self>
    where
        W: IntoIterator<Item = (Product, f64)>,
        S: IntoIterator<Item = (Center, Vec<Product>)>,
        E: IntoIterator<Item = (Node, Node, f64)>,
    {
        let weights: HashMap<Product, f64> = weights.into_iter().collect();
        if let Some((product, weight)) = weights
            .iter()
            .find(|(_, w)| !(w.is_finite() && **w > 0.0))
        {
            return Err(Error::Network(format!(
                "product {product} has invalid unit weight {weight}"
            )));
        }

        let mut owner: HashMap<Product, Center> = HashMap::new();
        let mut ordered: Vec<(Center, Vec<Product>)> = Vec::new();
        for (center, products) in stock_in_center_order(stock) {
            for product in &products {
                if !weights.contains_key(product) {
                    return Err(Error::Network(format!(
                        "product {product} stocked at {center} has no unit weight"
                    )));
                }
                if let Some(previous) = owner.insert(*product, center) {
                    if previous != center {
                        return Err(Error::Network(format!(
                            "product {product} is stocked by both {previous} and {center}"
                        )));
                    }
                }
            }
            ordered.push((center, products));
        }

        let mut graph = HashMap::new();
        for (from, to, km) in edges {
            if from == to {
                return Err(Error::Network(format!("edge {from}-{to} is a self loop")));
            }
            if !(km.is_finite() && km >= 0.0) {
                return Err(Error::Network(format!(
                    "edge {from}-{to} has invalid distance {km}"
                )));
            }
            graph.insert((from, to), km);
        }

        debug!(
            "Network built: {} weighted products, {} centers, {} edges",
            weights.len(),
            ordered.len(),
            graph.len()
        );

        Ok(Self {
            weights,
            stock: ordered,
            edges: graph,
        })
    }

    /// Direct road distance in either direction, or infinity when no edge
    /// connects the two nodes. Never routes through an intermediate node.
    pub fn distance(&self, from: Node, to: Node) -> f64 {
        match self
            .edges
            .get(&(from, to))
            .or_else(|| self.edges.get(&(to, from)))
        {
            Some(km) => *km,
            None => {
                trace!("No direct route {} -> {}", from, to);
                f64::INFINITY
            }
        }
    }

    pub fn cost_rate_per_km(&self, weight: f64) -> f64 {
        tariff::cost_rate_per_km(weight)
    }

    /// The center that stocks `product`, if any.
    pub fn locate(&self, product: Product) -> Option<Center> {
        self.stock
            .iter()
            .find(|(_, products)| products.contains(&product))
            .map(|(center, _)| *center)
    }

    /// Unit weight of `product`; unweighted products count as zero.
    pub fn unit_weight(&self, product: Product) -> f64 {
        self.weights.get(&product).copied().unwrap_or(0.0)
    }

    /// Total weight of `count` units of each listed product.
    pub fn load_weight(&self, loads: &[(Product, u64)]) -> f64 {
        loads
            .iter()
            .map(|(product, count)| *count as f64 * self.unit_weight(*product))
            .sum()
    }
}

// Deduplicate by center, keeping the fixed enumeration order.
fn stock_in_center_order<S>(stock: S) -> Vec<(Center, Vec<Product>)>
where
    S: IntoIterator<Item = (Center, Vec<Product>)>,
{
    let mut by_center: HashMap<Center, Vec<Product>> = HashMap::new();
    for (center, products) in stock {
        let entry = by_center.entry(center).or_default();
        for product in products {
            if !entry.contains(&product) {
                entry.push(product);
            }
        }
    }
    Center::ALL
        .into_iter()
        .filter_map(|center| by_center.remove(&center).map(|p| (center, p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    const C1: Node = Node::Center(Center::C1);
    const C2: Node = Node::Center(Center::C2);
    const C3: Node = Node::Center(Center::C3);
    const L1: Node = Node::Destination;

    #[rstest]
    #[case(C1, C2, 4.0)]
    #[case(C1, L1, 3.0)]
    #[case(C2, L1, 2.5)]
    #[case(C2, C3, 3.0)]
    #[case(C3, L1, 2.0)]
    fn standard_edges(#[case] a: Node, #[case] b: Node, #[case] km: f64) {
        let network = NetworkModel::standard();
        assert_eq!(network.distance(a, b), km);
        assert_eq!(network.distance(b, a), km);
    }

    #[test]
    fn missing_edges_are_infinite() {
        let network = NetworkModel::standard();
        assert_eq!(network.distance(C1, C3), f64::INFINITY);
        assert_eq!(network.distance(C3, C1), f64::INFINITY);
        assert_eq!(network.distance(L1, L1), f64::INFINITY);
    }

    fn any_node() -> impl Strategy<Value = Node> {
        prop_oneof![Just(C1), Just(C2), Just(C3), Just(L1)]
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(a in any_node(), b in any_node()) {
            let network = NetworkModel::standard();
            prop_assert_eq!(network.distance(a, b), network.distance(b, a));
        }
    }

    #[test]
    fn locates_every_product_in_one_center() {
        let network = NetworkModel::standard();
        for product in Product::ALL {
            let expected = Center::ALL[product.index() / 3];
            assert_eq!(network.locate(product), Some(expected));
        }
    }

    #[test]
    fn load_weight_sums_unit_weights() {
        let network = NetworkModel::standard();
        assert_eq!(network.unit_weight(Product::G), 0.5);
        let load = [(Product::A, 2), (Product::B, 1), (Product::C, 1)];
        assert_eq!(network.load_weight(&load), 16.0);
        assert_eq!(network.load_weight(&[]), 0.0);
        assert_eq!(network.load_weight(&[(Product::A, 10_000_000_000_000)]), 3.0e13);
    }

    #[test]
    fn custom_network_may_leave_products_unstocked() {
        let network = NetworkModel::new(
            [(Product::A, 1.0), (Product::B, 2.0)],
            [(Center::C2, vec![Product::A])],
            [(C2, L1, 1.5)],
        )
        .unwrap();
        assert_eq!(network.locate(Product::A), Some(Center::C2));
        assert_eq!(network.locate(Product::B), None);
        assert_eq!(network.distance(L1, C2), 1.5);
    }

    #[test]
    fn rejects_product_in_two_centers() {
        let result = NetworkModel::new(
            [(Product::A, 1.0)],
            [
                (Center::C1, vec![Product::A]),
                (Center::C3, vec![Product::A]),
            ],
            NO_EDGES,
        );
        assert!(matches!(result, Err(Error::Network(_))));
    }

    const NO_WEIGHTS: [(Product, f64); 0] = [];
    const NO_STOCK: [(Center, Vec<Product>); 0] = [];
    const NO_EDGES: [(Node, Node, f64); 0] = [];

    #[rstest]
    #[case(-1.0)]
    #[case(0.0)]
    #[case(f64::NAN)]
    fn rejects_bad_weights(#[case] weight: f64) {
        let result = NetworkModel::new([(Product::A, weight)], NO_STOCK, NO_EDGES);
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[test]
    fn rejects_bad_edges() {
        assert!(NetworkModel::new(NO_WEIGHTS, NO_STOCK, [(C1, L1, -2.0)]).is_err());
        assert!(NetworkModel::new(NO_WEIGHTS, NO_STOCK, [(C1, L1, f64::INFINITY)]).is_err());
        assert!(NetworkModel::new(NO_WEIGHTS, NO_STOCK, [(C1, C1, 1.0)]).is_err());
        assert!(NetworkModel::new(
            NO_WEIGHTS,
            [(Center::C1, vec![Product::A])],
            [(C1, L1, 1.0)]
        )
        .is_err());
    }
}
