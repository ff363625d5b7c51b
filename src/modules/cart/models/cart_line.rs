use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money;
use crate::modules::menu::MenuItem;

/// One priced entry of the order in progress.
/// Identical lines may coexist; there is no quantity field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub label: String,
    pub unit_price: Decimal,
}

impl CartLine {
    pub fn new(label: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            label: label.into(),
            unit_price,
        }
    }

    /// Price as shown next to the label, e.g. `$2.15`
    pub fn display_price(&self) -> String {
        money::format_usd(self.unit_price)
    }
}

impl From<&MenuItem> for CartLine {
    fn from(item: &MenuItem) -> Self {
        Self::new(item.label.clone(), item.price)
    }
}

impl std::fmt::Display for CartLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.display_price())
    }
}
