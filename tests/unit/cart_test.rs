// Property-based tests for the cart
//
// - Subtotal is the sum of added prices, independent of insertion order
// - Removing position i keeps every other line in its relative order
// - Out-of-range removals are rejected and leave the cart unchanged
//
// Uses proptest to validate the properties across many carts

use burger_kiosk::cart::{Cart, CartLine};
use burger_kiosk::core::AppError;
use burger_kiosk::pricing::PricingCalculator;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Prices in cents, as on the menu board
fn prices() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..2_000u32, 0..20)
}

fn cart_from(cents: &[u32]) -> Cart {
    let mut cart = Cart::new();
    for (i, c) in cents.iter().enumerate() {
        cart.add_line(format!("item-{}", i), Decimal::new(*c as i64, 2));
    }
    cart
}

proptest! {
    #[test]
    fn test_subtotal_equals_sum_of_prices(cents in prices()) {
        let cart = cart_from(&cents);
        let expected = Decimal::new(cents.iter().map(|c| *c as i64).sum(), 2);

        prop_assert_eq!(PricingCalculator::default().subtotal(&cart), expected);
    }

    #[test]
    fn test_subtotal_is_order_independent(cents in prices()) {
        let mut reversed = cents.clone();
        reversed.reverse();

        let calc = PricingCalculator::default();
        prop_assert_eq!(
            calc.subtotal(&cart_from(&cents)),
            calc.subtotal(&cart_from(&reversed))
        );
    }

    #[test]
    fn test_remove_preserves_relative_order(
        cents in prop::collection::vec(0u32..2_000u32, 1..20),
        pick in any::<prop::sample::Index>()
    ) {
        let mut cart = cart_from(&cents);
        let before: Vec<CartLine> = cart.lines().to_vec();
        let index = pick.index(before.len());

        let removed = cart.remove_line(index).unwrap();

        let mut expected = before.clone();
        let expected_removed = expected.remove(index);

        prop_assert_eq!(removed, expected_removed);
        prop_assert_eq!(cart.len(), before.len() - 1);
        prop_assert_eq!(cart.lines(), expected.as_slice());
    }

    #[test]
    fn test_out_of_range_remove_rejected(
        cents in prices(),
        past_end in 0usize..10usize
    ) {
        let mut cart = cart_from(&cents);
        let before = cart.clone();
        let index = cents.len() + past_end;

        let result = cart.remove_line(index);

        let is_out_of_range = matches!(
            result,
            Err(AppError::IndexOutOfRange { index: i, len }) if i == index && len == cents.len()
        );
        prop_assert!(is_out_of_range);
        prop_assert_eq!(cart, before);
    }
}

#[test]
fn test_identical_lines_are_not_merged() {
    let mut cart = Cart::new();
    cart.add_line("Medium $2.15", dec!(2.15));
    cart.add_line("Medium $2.15", dec!(2.15));

    assert_eq!(cart.len(), 2);
    for line in cart.lines() {
        assert_eq!(line, &CartLine::new("Medium $2.15", dec!(2.15)));
    }
}

#[test]
fn test_lines_reflect_live_state() {
    let mut cart = Cart::new();
    cart.add_line("Shake", dec!(2.90));
    assert_eq!(cart.lines().len(), 1);

    cart.add_line("Shake", dec!(2.90));
    cart.remove_line(0).unwrap();
    assert_eq!(cart.lines().len(), 1);
}

#[test]
fn test_add_line_accepts_any_price() {
    // The cart does no validation of its own
    let mut cart = Cart::new();
    cart.add_line("", dec!(-1.00));
    assert_eq!(cart.len(), 1);
}
