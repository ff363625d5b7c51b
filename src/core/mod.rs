pub mod error;
pub mod money;
pub mod traits;

pub use error::{AppError, Result};
pub use money::{format_usd, round_for_display};
pub use traits::{Clock, FixedClock, SystemClock};
