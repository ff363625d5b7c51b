use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::menu::models::{MenuCategory, MenuItem};

/// (code, label, price in cents, category, button wording)
type CatalogRow = (
    &'static str,
    &'static str,
    i64,
    MenuCategory,
    Option<&'static str>,
);

const STANDARD_MENU: [CatalogRow; 12] = [
    (
        "combo-1",
        "Double Double Combo",
        970,
        MenuCategory::Combo,
        Some("Double Double, Fries, Medium Drink"),
    ),
    (
        "combo-2",
        "Cheeseburger Combo",
        810,
        MenuCategory::Combo,
        Some("Cheeseburger, Fries, Medium Drink"),
    ),
    (
        "combo-3",
        "Hamburger Combo",
        770,
        MenuCategory::Combo,
        Some("Hamburger, Fries, Medium Drink"),
    ),
    ("double-double", "Double Double", 535, MenuCategory::ALaCarte, None),
    ("cheeseburger", "Cheeseburger", 375, MenuCategory::ALaCarte, None),
    ("hamburger", "Hamburger", 335, MenuCategory::ALaCarte, None),
    ("fries", "French Fries", 220, MenuCategory::ALaCarte, None),
    ("shake", "Shake", 290, MenuCategory::ALaCarte, Some("Shakes")),
    ("small", "Small $2.00", 200, MenuCategory::Drink, None),
    ("medium", "Medium $2.15", 215, MenuCategory::Drink, None),
    ("large", "Large $2.35", 235, MenuCategory::Drink, None),
    ("x-large", "X-Large $2.55", 255, MenuCategory::Drink, None),
];

/// Fixed, ordered menu the kiosk sells from
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog from arbitrary items; codes must be unique
    pub fn new(items: Vec<MenuItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.code.as_str()) {
                return Err(AppError::validation(format!(
                    "Duplicate menu code: {}",
                    item.code
                )));
            }
        }

        Ok(Self { items })
    }

    /// The restaurant's menu: combos, then à la carte, then drink sizes.
    /// Every row goes through the same validation as a custom catalog.
    pub fn standard() -> Result<Self> {
        let items = STANDARD_MENU
            .iter()
            .map(|&(code, label, cents, category, description)| -> Result<MenuItem> {
                let item = MenuItem::new(code, label, Decimal::new(cents, 2), category)?;
                Ok(match description {
                    Some(description) => item.with_description(description),
                    None => item,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(items)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its code (case-insensitive)
    pub fn find(&self, code: &str) -> Result<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.code.eq_ignore_ascii_case(code))
            .ok_or_else(|| AppError::not_found(format!("Menu item '{}'", code)))
    }

    /// Look up an item by its 0-based display position
    pub fn get(&self, position: usize) -> Result<&MenuItem> {
        self.items
            .get(position)
            .ok_or_else(|| {
                AppError::not_found(format!("Menu position {}", position.saturating_add(1)))
            })
    }

    pub fn by_category(&self, category: MenuCategory) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items.iter().filter(move |item| item.category == category)
    }
}
