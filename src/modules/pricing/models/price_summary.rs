use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;

/// Subtotal, tax and total for one cart state.
/// Values are exact; rounding happens only in the display helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl PriceSummary {
    /// Lines shown under the cart: subtotal, tax, grand total
    pub fn display_lines(&self) -> [String; 3] {
        [
            format!("Total: {}", money::format_usd(self.subtotal)),
            format!("Tax: {}", money::format_usd(self.tax)),
            format!("Total with Tax: {}", money::format_usd(self.total)),
        ]
    }
}
