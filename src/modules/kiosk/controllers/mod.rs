pub mod terminal_controller;

pub use terminal_controller::{parse_command, Command, TerminalController};
