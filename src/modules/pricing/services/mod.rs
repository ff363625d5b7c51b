pub mod pricing_calculator;
pub mod tax_calculator;

pub use pricing_calculator::PricingCalculator;
pub use tax_calculator::{TaxCalculator, DEFAULT_TAX_RATE};
