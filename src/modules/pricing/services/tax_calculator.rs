use rust_decimal::Decimal;

use crate::core::error::AppError;

/// Sales tax applied to every order: 8%
pub const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// TaxCalculator applies a flat rate to an order subtotal
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// tax = subtotal × rate, unrounded
    pub fn calculate_tax(&self, subtotal: Decimal, tax_rate: Decimal) -> Decimal {
        subtotal * tax_rate
    }

    /// total = subtotal + tax
    pub fn total_with_tax(&self, subtotal: Decimal, tax: Decimal) -> Decimal {
        subtotal + tax
    }

    /// Validate tax rate is within acceptable range (0-1.0) with max 4 decimal places
    pub fn validate_tax_rate(&self, tax_rate: Decimal) -> Result<(), AppError> {
        if tax_rate < Decimal::ZERO {
            return Err(AppError::Validation(
                "Tax rate cannot be negative".to_string()
            ));
        }

        if tax_rate > Decimal::ONE {
            return Err(AppError::Validation(
                "Tax rate cannot exceed 1.0 (100%)".to_string()
            ));
        }

        if tax_rate.normalize().scale() > 4 {
            return Err(AppError::Validation(
                "Tax rate cannot have more than 4 decimal places".to_string()
            ));
        }

        Ok(())
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
