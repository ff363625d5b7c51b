use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::core::Result;
use crate::modules::pricing::PricingCalculator;

/// Banner looked up next to the working directory when no path is configured
pub const DEFAULT_LOGO_PATH: &str = "Logo.txt";

/// Kiosk configuration: pricing and cosmetic assets
#[derive(Debug, Clone)]
pub struct KioskConfig {
    pub tax_rate: Decimal,
    pub logo_path: PathBuf,
}

impl KioskConfig {
    pub fn pricing(&self) -> Result<PricingCalculator> {
        PricingCalculator::new(self.tax_rate)
    }
}
