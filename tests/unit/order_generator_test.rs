// Property-based tests for order confirmation
//
// - Order numbers always fall in 1..=100
// - Timestamps use the `YYYY-MM-DD HH:MM:SS` layout
// - The order keeps a snapshot of the cart, not a live view

#[path = "../helpers/mod.rs"]
mod helpers;

use burger_kiosk::cart::Cart;
use burger_kiosk::core::FixedClock;
use burger_kiosk::orders::services::ORDER_NUMBER_RANGE;
use burger_kiosk::orders::OrderGenerator;
use helpers::TestDataFactory;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

proptest! {
    #[test]
    fn test_order_number_in_range(seed in any::<u64>()) {
        let mut generator = OrderGenerator::seeded(seed, TestDataFactory::clock());

        for _ in 0..10 {
            let order = generator.create_order(&Cart::new(), Decimal::ZERO);
            prop_assert!((1..=100).contains(&order.number()), "got {}", order.number());
        }
    }
}

#[test]
fn test_numbers_cover_the_range() {
    let mut generator = OrderGenerator::seeded(2024, TestDataFactory::clock());
    let cart = Cart::new();

    let seen: HashSet<u8> = (0..5_000)
        .map(|_| generator.create_order(&cart, Decimal::ZERO).number())
        .collect();

    // Both ends are reachable and collisions are expected
    assert!(seen.contains(ORDER_NUMBER_RANGE.start()));
    assert!(seen.contains(ORDER_NUMBER_RANGE.end()));
    assert!(seen.len() <= 100);
}

#[test]
fn test_timestamp_format() {
    let mut generator = OrderGenerator::seeded(1, TestDataFactory::clock());
    let order = generator.create_order(&Cart::new(), Decimal::ZERO);

    assert_eq!(order.timestamp(), "2025-11-01 12:34:56");
    assert_eq!(order.placed_at(), TestDataFactory::checkout_time());
}

#[test]
fn test_timestamp_pads_single_digits() {
    let early = chrono::NaiveDate::from_ymd_opt(2026, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    let mut generator = OrderGenerator::seeded(1, FixedClock(early));

    let order = generator.create_order(&Cart::new(), Decimal::ZERO);
    assert_eq!(order.timestamp(), "2026-01-02 03:04:05");
}

#[test]
fn test_order_is_a_snapshot() {
    let mut cart = Cart::new();
    cart.add_line("Cheeseburger", dec!(3.75));

    let mut generator = OrderGenerator::seeded(9, TestDataFactory::clock());
    let order = generator.create_order(&cart, dec!(4.05));

    cart.remove_line(0).unwrap();
    cart.add_line("Shake", dec!(2.90));

    assert_eq!(order.lines().len(), 1);
    assert_eq!(order.lines()[0].label, "Cheeseburger");
    assert_eq!(order.total_with_tax(), dec!(4.05));
}
