// KioskSession owns the cart for one customer and applies actions to it.
// Nothing here knows how screens are drawn; the terminal controller (or a
// test) feeds actions in and reads state back out.

use crate::core::{AppError, Clock, Result, SystemClock};
use crate::modules::cart::{Cart, CartLine};
use crate::modules::kiosk::models::{Action, MenuSelection, Outcome, Screen};
use crate::modules::menu::{MenuCatalog, MenuItem};
use crate::modules::orders::{Order, OrderGenerator};
use crate::modules::pricing::{PriceSummary, PricingCalculator};

pub struct KioskSession<C = SystemClock> {
    catalog: MenuCatalog,
    cart: Cart,
    pricing: PricingCalculator,
    orders: OrderGenerator<C>,
    screen: Screen,
}

impl<C: Clock> KioskSession<C> {
    pub fn new(
        catalog: MenuCatalog,
        pricing: PricingCalculator,
        orders: OrderGenerator<C>,
    ) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            pricing,
            orders,
            screen: Screen::Browsing,
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Totals for the cart as it is right now
    pub fn summary(&self) -> PriceSummary {
        self.pricing.summarize(&self.cart)
    }

    /// The confirmed order, while the confirmation screen is showing
    pub fn current_order(&self) -> Option<&Order> {
        match &self.screen {
            Screen::Confirmation(order) => Some(order),
            _ => None,
        }
    }

    /// Apply one action.
    ///
    /// # Errors
    /// * `AppError::InvalidAction` - action not available on the current screen
    /// * `AppError::NotFound` - unknown menu selection
    /// * `AppError::IndexOutOfRange` - cart position past the end
    ///
    /// A failed action leaves the session unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        tracing::debug!(action = action.name(), screen = %self.screen, "Dispatching action");

        if !Self::is_available(&action, &self.screen) {
            tracing::warn!(action = action.name(), screen = %self.screen, "Action rejected");
            return Err(AppError::invalid_action(format!(
                "'{}' is not available on the {} screen",
                action.name(),
                self.screen
            )));
        }

        match action {
            Action::Exit => return Ok(Outcome::Exit),

            Action::ShowMenu => self.screen = Screen::Browsing,

            Action::Add(selection) => {
                let item = self.resolve(&selection)?.clone();
                self.cart.add_item(&item);
                tracing::info!(
                    label = %item.label,
                    price = %item.price,
                    lines = self.cart.len(),
                    "Line added"
                );
            }

            Action::ViewCart => self.screen = Screen::CartReview,

            Action::Remove(index) => {
                let removed = self.remove(index)?;
                tracing::info!(
                    index,
                    label = %removed.label,
                    lines = self.cart.len(),
                    "Line removed"
                );
            }

            Action::Checkout => {
                let summary = self.summary();
                let order = self.orders.create_order(&self.cart, summary.total);
                self.screen = Screen::Confirmation(order);
            }

            Action::NewOrder => {
                self.cart.clear();
                self.screen = Screen::Browsing;
            }

            Action::Receipt => {
                if let Some(order) = self.current_order() {
                    return Ok(Outcome::Receipt(serde_json::to_string_pretty(order)?));
                }
            }
        }

        Ok(Outcome::Updated)
    }

    fn is_available(action: &Action, screen: &Screen) -> bool {
        match action {
            Action::Exit => true,
            Action::ShowMenu | Action::Add(_) | Action::ViewCart => {
                matches!(screen, Screen::Browsing | Screen::CartReview)
            }
            Action::Remove(_) | Action::Checkout => matches!(screen, Screen::CartReview),
            Action::NewOrder | Action::Receipt => matches!(screen, Screen::Confirmation(_)),
        }
    }

    fn resolve(&self, selection: &MenuSelection) -> Result<&MenuItem> {
        match selection {
            MenuSelection::Code(code) => self.catalog.find(code),
            MenuSelection::Position(position) => self.catalog.get(*position),
        }
    }

    fn remove(&mut self, index: usize) -> Result<CartLine> {
        self.cart.remove_line(index).inspect_err(|err| {
            tracing::warn!(index, error = %err, "Removal rejected");
        })
    }
}

impl KioskSession<SystemClock> {
    /// Standard menu, default tax, local clock and an entropy-seeded generator
    pub fn standard() -> Result<Self> {
        Ok(Self::new(
            MenuCatalog::standard()?,
            PricingCalculator::default(),
            OrderGenerator::from_entropy(),
        ))
    }
}
