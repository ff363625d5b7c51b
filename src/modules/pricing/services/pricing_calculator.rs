use rust_decimal::Decimal;

use super::tax_calculator::{TaxCalculator, DEFAULT_TAX_RATE};
use crate::core::Result;
use crate::modules::cart::Cart;
use crate::modules::pricing::models::PriceSummary;

/// Derives order amounts from cart contents at a fixed tax rate.
/// Pure: the same cart always yields the same summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingCalculator {
    tax_rate: Decimal,
}

impl PricingCalculator {
    /// Create a calculator, validating the rate once
    pub fn new(tax_rate: Decimal) -> Result<Self> {
        TaxCalculator::new().validate_tax_rate(tax_rate)?;
        Ok(Self { tax_rate })
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// Sum of line prices; zero for an empty cart
    pub fn subtotal(&self, cart: &Cart) -> Decimal {
        cart.lines().iter().map(|line| line.unit_price).sum()
    }

    pub fn tax(&self, subtotal: Decimal) -> Decimal {
        TaxCalculator::new().calculate_tax(subtotal, self.tax_rate)
    }

    pub fn total_with_tax(&self, subtotal: Decimal, tax: Decimal) -> Decimal {
        TaxCalculator::new().total_with_tax(subtotal, tax)
    }

    pub fn summarize(&self, cart: &Cart) -> PriceSummary {
        let subtotal = self.subtotal(cart);
        let tax = self.tax(subtotal);

        PriceSummary {
            subtotal,
            tax,
            total: self.total_with_tax(subtotal, tax),
        }
    }
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}
