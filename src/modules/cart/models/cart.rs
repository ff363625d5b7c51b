// The cart is an ordered list of lines owned by whoever drives the session.
// Insertion order is display order. Positions are re-derived after every
// removal, so a line has no identity beyond its current index.

use rust_decimal::Decimal;
use serde::Serialize;

use super::cart_line::CartLine;
use crate::core::{AppError, Result};
use crate::modules::menu::MenuItem;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. No validation, no merging with identical lines.
    pub fn add_line(&mut self, label: impl Into<String>, unit_price: Decimal) {
        self.lines.push(CartLine::new(label, unit_price));
    }

    /// Append a line for a catalog entry
    pub fn add_item(&mut self, item: &MenuItem) {
        self.lines.push(CartLine::from(item));
    }

    /// Remove the line at `index`, shifting later lines down by one.
    ///
    /// # Errors
    /// * `AppError::IndexOutOfRange` when `index >= len()`; the cart is untouched
    pub fn remove_line(&mut self, index: usize) -> Result<CartLine> {
        if index >= self.lines.len() {
            return Err(AppError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            });
        }

        Ok(self.lines.remove(index))
    }

    /// Live view of the current lines, in display order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
