// Kiosk module: screens, user actions and the terminal front-end

pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::TerminalController;
pub use models::{Action, MenuSelection, Outcome, Screen};
pub use services::{load_logo, KioskSession, Logo};
