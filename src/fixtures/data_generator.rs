use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::types::Customer;

const CUSTOMER_NAMES: [&str; 10] = [
    "Joe", "Mary", "Priya", "Tom", "Aiko", "Luis", "Grace", "Omar", "Nina", "Ken",
];

/// Generates a deterministic stream of customers with whole-number distances in
/// `0..=max_distance`.
pub fn generate_random_customers(count: usize, max_distance: u32, seed: u64) -> Vec<Customer> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut customers = Vec::with_capacity(count);

    for _ in 0..count {
        let name = CUSTOMER_NAMES.choose(&mut rng).copied().unwrap_or("Customer");
        let distance = rng.gen_range(0..=max_distance);
        customers.push(Customer::new(name, distance as f64));
    }

    info!(
        "Generated {} customers (max distance {}, seed {})",
        customers.len(),
        max_distance,
        seed
    );
    customers
}
