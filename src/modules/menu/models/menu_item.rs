// A menu item is a catalog definition: what the customer can pick and what
// it costs. Selecting one creates a cart line carrying the same label and price.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};

/// Menu sections, in the order they are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuCategory {
    /// Burger, fries and a medium drink at a bundle price
    #[serde(rename = "combo")]
    Combo,

    /// Single items ordered on their own
    #[serde(rename = "a_la_carte")]
    ALaCarte,

    /// Soft drink sizes
    #[serde(rename = "drink")]
    Drink,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 3] = [
        MenuCategory::Combo,
        MenuCategory::ALaCarte,
        MenuCategory::Drink,
    ];

    /// Section heading shown above the items
    pub fn heading(&self) -> &'static str {
        match self {
            MenuCategory::Combo => "Combos",
            MenuCategory::ALaCarte => "Custom Order",
            MenuCategory::Drink => "Soft Drinks",
        }
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuCategory::Combo => write!(f, "combo"),
            MenuCategory::ALaCarte => write!(f, "a_la_carte"),
            MenuCategory::Drink => write!(f, "drink"),
        }
    }
}

/// A single orderable entry of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Short selector typed at the kiosk (e.g. `combo-1`)
    pub code: String,

    /// Label copied onto the cart line
    pub label: String,

    /// Unit price in dollars
    pub price: Decimal,

    pub category: MenuCategory,

    /// Button wording when it differs from the label (combo contents, plurals)
    pub description: Option<String>,
}

impl MenuItem {
    /// Create a menu item with validation
    ///
    /// # Arguments
    /// * `code` - Selector, unique within a catalog
    /// * `label` - Display label, non-empty
    /// * `price` - Non-negative, whole cents
    /// * `category` - Menu section
    pub fn new(
        code: impl Into<String>,
        label: impl Into<String>,
        price: Decimal,
        category: MenuCategory,
    ) -> Result<Self> {
        let code = code.into();
        let label = label.into();

        if code.trim().is_empty() {
            return Err(AppError::validation("Menu item code cannot be empty"));
        }

        if label.trim().is_empty() {
            return Err(AppError::validation("Menu item label cannot be empty"));
        }

        money::validate_price(price).map_err(AppError::Validation)?;

        Ok(Self {
            code,
            label,
            price,
            category,
            description: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Button text: the description when there is one, then the price
    pub fn button_text(&self) -> String {
        match self.category {
            // drink labels already carry their price
            MenuCategory::Drink => self.label.clone(),
            _ => format!(
                "{} {}",
                self.description.as_deref().unwrap_or(&self.label),
                money::format_usd(self.price)
            ),
        }
    }
}
