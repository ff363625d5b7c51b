pub mod cart;
pub mod kiosk;
pub mod menu;
pub mod orders;
pub mod pricing;
