pub mod kiosk_session;
pub mod logo_loader;

pub use kiosk_session::KioskSession;
pub use logo_loader::{load_logo, Logo, MAX_LOGO_HEIGHT, MAX_LOGO_WIDTH};
