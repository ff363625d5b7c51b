pub mod order_generator;

pub use order_generator::{OrderGenerator, ORDER_NUMBER_RANGE};
