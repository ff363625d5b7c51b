//! Burger Kiosk Ordering Library
//!
//! Menu catalog, cart, pricing and order confirmation for a fast-food ordering
//! kiosk, plus the session that drives them from user actions.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::cart;
pub use modules::kiosk;
pub use modules::menu;
pub use modules::orders;
pub use modules::pricing;
