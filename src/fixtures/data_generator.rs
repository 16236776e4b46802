use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::config::constant::MAX_SAMPLE_QUANTITY;
use crate::domain::types::{Order, Product};

/// Generates `count` reproducible random orders.
///
/// Each order requests between one and four distinct products, each with a
/// quantity in `1..=MAX_SAMPLE_QUANTITY`.
pub fn generate_random_orders(count: usize, seed: u64) -> Vec<Order> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let orders: Vec<Order> = (0..count).map(|_| random_order(&mut rng)).collect();
    debug!("Generated {} random order(s) with seed {}", count, seed);
    orders
}

fn random_order(rng: &mut ChaCha8Rng) -> Order {
    let distinct = rng.gen_range(1..=4);
    let products = Product::ALL.into_iter().choose_multiple(rng, distinct);

    products.into_iter().fold(Order::new(), |order, product| {
        order.with(product, rng.gen_range(1..=MAX_SAMPLE_QUANTITY))
    })
}
