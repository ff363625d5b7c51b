mod action;
mod screen;

pub use action::{Action, MenuSelection, Outcome};
pub use screen::Screen;
