use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::core::{Clock, SystemClock};
use crate::modules::cart::Cart;
use crate::modules::orders::models::Order;

/// Pickup numbers are drawn uniformly from this range
pub const ORDER_NUMBER_RANGE: RangeInclusive<u8> = 1..=100;

/// Produces order confirmations at checkout.
/// Collisions between order numbers are possible and accepted.
#[derive(Debug)]
pub struct OrderGenerator<C = SystemClock> {
    rng: StdRng,
    clock: C,
}

impl OrderGenerator<SystemClock> {
    /// Generator seeded from OS entropy, stamped with the local clock
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy(), SystemClock)
    }
}

impl<C: Clock> OrderGenerator<C> {
    pub fn new(rng: StdRng, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Deterministic draws for a given seed
    pub fn seeded(seed: u64, clock: C) -> Self {
        Self::new(StdRng::seed_from_u64(seed), clock)
    }

    /// Snapshot the cart and stamp it with a number and the current time
    pub fn create_order(&mut self, cart: &Cart, total_with_tax: Decimal) -> Order {
        let number = self.rng.gen_range(ORDER_NUMBER_RANGE);
        let placed_at = self.clock.now();

        tracing::info!(
            order_number = number,
            lines = cart.len(),
            total = %total_with_tax,
            "Order created"
        );

        Order::new(number, placed_at, cart.lines().to_vec(), total_with_tax)
    }
}
