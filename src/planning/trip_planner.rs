use tracing::{debug, span, warn, Level};

use crate::domain::types::{Center, Order, Product, Stop, TripPlan};
use crate::network::NetworkModel;

/// Groups the units of an order by the center that stocks them.
#[derive(Debug, Clone, Copy)]
pub struct TripPlanner<'a> {
    network: &'a NetworkModel,
}

impl<'a> TripPlanner<'a> {
    pub fn new(network: &'a NetworkModel) -> Self {
        Self { network }
    }

    /// Build the pickup plan for `order`.
    ///
    /// Each requested product is counted at its center. Stops
    /// follow `Center::ALL` whatever order the products were listed in.
    /// Products no center stocks are dropped (logged, not an error), as are
    /// zero and negative quantities.
    pub fn build_trip_plan(&self, order: &Order) -> TripPlan {
        let plan_span = span!(Level::DEBUG, "build_trip_plan");
        let _guard = plan_span.enter();

        let mut per_center: [Vec<(Product, u64)>; 3] = Default::default();

        for (product, quantity) in order.iter().filter(|(_, q)| *q > 0) {
            match self.network.locate(product) {
                Some(center) => {
                    per_center[center.index()].push((product, quantity as u64));
                }
                None => warn!(
                    "Product {} is not stocked by any center, dropping {} unit(s)",
                    product, quantity
                ),
            }
        }

        let stops: Vec<Stop> = Center::ALL
            .into_iter()
            .zip(per_center)
            .filter(|(_, loads)| !loads.is_empty())
            .map(|(center, loads)| Stop { center, loads })
            .collect();

        debug!(
            "Trip plan: {:?}",
            stops
                .iter()
                .map(|s| (s.center, s.unit_count()))
                .collect::<Vec<_>>()
        );

        TripPlan { stops }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Node;

    #[test]
    fn empty_order_gives_empty_plan() {
        let network = NetworkModel::standard();
        let plan = TripPlanner::new(&network).build_trip_plan(&Order::new());
        assert!(plan.is_empty());
    }

    #[test]
    fn counts_products_and_groups_by_center() {
        let network = NetworkModel::standard();
        let order = Order::new()
            .with(Product::I, 1)
            .with(Product::A, 2)
            .with(Product::D, 1)
            .with(Product::B, 1);
        let plan = TripPlanner::new(&network).build_trip_plan(&order);

        assert_eq!(
            plan.centers().collect::<Vec<_>>(),
            vec![Center::C1, Center::C2, Center::C3]
        );
        let c1 = plan.stop(Center::C1).unwrap();
        assert_eq!(c1.loads, vec![(Product::A, 2), (Product::B, 1)]);
        assert_eq!(
            c1.units().collect::<Vec<_>>(),
            vec![Product::A, Product::A, Product::B]
        );
        assert_eq!(plan.stop(Center::C2).unwrap().loads, vec![(Product::D, 1)]);
        assert_eq!(plan.stop(Center::C3).unwrap().loads, vec![(Product::I, 1)]);
    }

    #[test]
    fn omits_centers_without_units() {
        let network = NetworkModel::standard();
        let order = Order::new().with(Product::H, 3).with(Product::E, 0);
        let plan = TripPlanner::new(&network).build_trip_plan(&order);
        assert_eq!(plan.centers().collect::<Vec<_>>(), vec![Center::C3]);
        assert_eq!(plan.stops[0].unit_count(), 3);
    }

    #[test]
    fn huge_quantities_are_counted_not_expanded() {
        let network = NetworkModel::standard();
        let order = Order::new().with(Product::A, 10_000_000_000_000);
        let plan = TripPlanner::new(&network).build_trip_plan(&order);
        assert_eq!(plan.stops[0].loads, vec![(Product::A, 10_000_000_000_000)]);
        assert_eq!(plan.stops[0].unit_count(), 10_000_000_000_000);
    }

    #[test]
    fn negative_quantities_are_not_planned() {
        let network = NetworkModel::standard();
        let order = Order::new().with(Product::A, -4).with(Product::G, 1);
        let plan = TripPlanner::new(&network).build_trip_plan(&order);
        assert_eq!(plan.centers().collect::<Vec<_>>(), vec![Center::C3]);
    }

    #[test]
    fn unstocked_products_are_dropped() {
        let network = NetworkModel::new(
            [(Product::A, 3.0), (Product::G, 0.5)],
            [(Center::C3, vec![Product::G])],
            [(Node::Center(Center::C3), Node::Destination, 2.0)],
        )
        .unwrap();
        let order = Order::new().with(Product::A, 5).with(Product::G, 1);
        let plan = TripPlanner::new(&network).build_trip_plan(&order);
        assert_eq!(plan.stops.len(), 1);
        assert_eq!(plan.stops[0].loads, vec![(Product::G, 1)]);
    }
}
