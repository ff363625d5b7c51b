// An order is the immutable record produced at checkout: a pickup number,
// the time it was placed, a copy of the cart lines and the amount due.
// It lives only as long as the confirmation screen.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money;
use crate::modules::cart::CartLine;

/// Format of the timestamp printed on the confirmation
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const PICKUP_DIRECTIONS: &str = "Directions: Pay at the terminal";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    number: u8,
    placed_at: NaiveDateTime,
    lines: Vec<CartLine>,
    total_with_tax: Decimal,
}

impl Order {
    pub(crate) fn new(
        number: u8,
        placed_at: NaiveDateTime,
        lines: Vec<CartLine>,
        total_with_tax: Decimal,
    ) -> Self {
        Self {
            number,
            placed_at,
            lines,
            total_with_tax,
        }
    }

    /// Pickup number, 1 to 100. Not unique across orders.
    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn placed_at(&self) -> NaiveDateTime {
        self.placed_at
    }

    /// `YYYY-MM-DD HH:MM:SS`
    pub fn timestamp(&self) -> String {
        self.placed_at.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Cart lines as they were at checkout
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total_with_tax(&self) -> Decimal {
        self.total_with_tax
    }

    /// Confirmation screen text, top to bottom
    pub fn confirmation_lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.lines.len() + 4);
        out.push(format!("Order Number: {}", self.number));
        out.push(self.timestamp());
        out.extend(self.lines.iter().map(ToString::to_string));
        out.push(format!(
            "Total with Tax: {}",
            money::format_usd(self.total_with_tax)
        ));
        out.push(PICKUP_DIRECTIONS.to_string());
        out
    }
}
