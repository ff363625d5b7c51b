use crate::modules::orders::Order;

/// Where the customer is in the ordering flow
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Picking items from the menu
    #[default]
    Browsing,

    /// Looking at the cart with totals
    CartReview,

    /// Order placed; holds the confirmation until a new order starts
    Confirmation(Order),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Browsing => "menu",
            Screen::CartReview => "cart",
            Screen::Confirmation(_) => "confirmation",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
