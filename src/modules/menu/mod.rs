// Menu module

pub mod models;
pub mod services;

pub use models::{MenuCategory, MenuItem};
pub use services::MenuCatalog;
