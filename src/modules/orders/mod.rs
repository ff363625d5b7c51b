// Orders module

pub mod models;
pub mod services;

pub use models::{Order, PICKUP_DIRECTIONS};
pub use services::OrderGenerator;
