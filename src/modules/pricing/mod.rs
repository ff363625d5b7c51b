// Pricing module

pub mod models;
pub mod services;

pub use models::PriceSummary;
pub use services::{PricingCalculator, TaxCalculator, DEFAULT_TAX_RATE};
