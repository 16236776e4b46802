use delivery_cost::fixtures::data_generator::generate_random_orders;
use delivery_cost::network::cost_rate_per_km;
use delivery_cost::{Center, NetworkModel, Node, Order, Product, RouteSimulator, SearchStrategy};
use proptest::prelude::*;

fn quote(entries: &str) -> f64 {
    let network = NetworkModel::standard();
    let order: Order = entries.parse().unwrap();
    RouteSimulator::new(&network).calculate_min_cost(&order)
}

#[test]
fn published_scenarios() {
    assert_eq!(quote(""), 0.0);
    assert_eq!(quote("A=1"), 30.0);
    assert_eq!(quote("G=1"), 20.0);
    assert_eq!(quote("A=10,B=10,C=10"), 630.0);
    assert_eq!(quote("A=1,G=1"), 70.0);
}

#[test]
fn single_center_cost_is_one_loaded_leg() {
    let network = NetworkModel::standard();
    let simulator = RouteSimulator::new(&network);
    for center in Center::ALL {
        let product = Product::ALL
            .into_iter()
            .find(|p| network.locate(*p) == Some(center))
            .unwrap();
        let order = Order::new().with(product, 3);
        let weight = 3.0 * network.unit_weight(product);
        let expected =
            network.distance(Node::Center(center), Node::Destination) * cost_rate_per_km(weight);
        assert_eq!(simulator.calculate_min_cost(&order), expected);
    }
}

#[test]
fn json_order_round_trip_through_the_simulator() {
    let order: Order = serde_json::from_str(r#"{"A": 1, "G": 1}"#).unwrap();
    let network = NetworkModel::standard();
    let cost = RouteSimulator::new(&network).calculate_min_cost(&order);
    assert_eq!(
        serde_json::json!({ "minimum_cost": cost }),
        serde_json::json!({ "minimum_cost": 70.0 })
    );
}

#[test]
fn very_large_json_quantity_is_quoted() {
    let order: Order = serde_json::from_str(r#"{"A": 10000000000000}"#).unwrap();
    let network = NetworkModel::standard();
    let cost = RouteSimulator::new(&network).calculate_min_cost(&order);
    assert_eq!(cost, 3.0 * cost_rate_per_km(3.0e13));
    assert_eq!(order.requested_units(), 10_000_000_000_000);
}

#[test]
fn exhaustive_never_costs_more_on_sample_orders() {
    let network = NetworkModel::standard();
    let heuristic = RouteSimulator::new(&network);
    let exhaustive = RouteSimulator::with_strategy(&network, SearchStrategy::Exhaustive);
    for order in generate_random_orders(100, 64) {
        assert!(exhaustive.calculate_min_cost(&order) <= heuristic.calculate_min_cost(&order));
    }
}

proptest! {
    #[test]
    fn quotes_are_deterministic_and_rounded(quantities in proptest::collection::vec(0i64..20, 9)) {
        let order = Product::ALL
            .into_iter()
            .zip(quantities)
            .fold(Order::new(), |order, (p, q)| order.with(p, q));
        let network = NetworkModel::standard();
        let simulator = RouteSimulator::new(&network);

        let first = simulator.calculate_min_cost(&order);
        let second = simulator.calculate_min_cost(&order);
        prop_assert_eq!(first, second);
        prop_assert!(first >= 0.0);
        prop_assert!(first.is_finite());
        prop_assert!(((first * 100.0).round() - first * 100.0).abs() < 1e-6);
    }
}
