mod order;

pub use order::{Order, PICKUP_DIRECTIONS, TIMESTAMP_FORMAT};
