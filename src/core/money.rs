use rust_decimal::{Decimal, RoundingStrategy};

/// Display precision for US dollar amounts
pub const USD_SCALE: u32 = 2;

/// Rounds an amount to cents for presentation.
/// Internal sums and tax stay unrounded; only rendered values pass through here.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(USD_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as `$12.85`
pub fn format_usd(amount: Decimal) -> String {
    format!(
        "${:.width$}",
        round_for_display(amount),
        width = USD_SCALE as usize
    )
}

/// Validates that a catalog price is a non-negative amount in whole cents
pub fn validate_price(amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err(format!("Price cannot be negative, got: {}", amount));
    }

    if amount.normalize().scale() > USD_SCALE {
        return Err(format!(
            "Prices must have at most {} decimal places, got {}",
            USD_SCALE, amount
        ));
    }

    Ok(())
}
