// Cart module

pub mod models;

pub use models::{Cart, CartLine};
