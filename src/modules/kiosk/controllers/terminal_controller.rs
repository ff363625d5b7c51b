// Line-oriented terminal front-end. Reads one command per line, turns it into
// an Action for the session and redraws the current screen.

use std::io::{BufRead, Write};

use crate::core::{AppError, Clock, Result};
use crate::modules::kiosk::models::{Action, MenuSelection, Outcome, Screen};
use crate::modules::kiosk::services::{KioskSession, Logo};
use crate::modules::menu::MenuCategory;

const WELCOME: &str = "Welcome to In-N-Out Burger!";
const FAREWELL: &str = "Thank you for your order!";

const HELP: &str = "\
Commands:
  menu              show the menu
  add <n|code>      add a menu item (e.g. `add 1`, `add fries`)
  cart              view your cart
  remove <n>        remove cart line n
  checkout          place the order
  new               start a new order after checkout
  receipt           print the confirmed order as JSON
  exit              leave";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Dispatch(Action),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
/// Positions typed by the user are 1-based.
pub fn parse_command(input: &str) -> Result<Option<Command>> {
    let mut words = input.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();

    let action = match verb.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(Some(Command::Help)),
        "menu" | "m" => Action::ShowMenu,
        "add" | "a" => {
            let argument = argument.ok_or_else(|| AppError::validation("Usage: add <n|code>"))?;
            match argument.parse::<usize>() {
                Ok(position) => Action::Add(MenuSelection::Position(one_based(position)?)),
                Err(_) => Action::Add(MenuSelection::Code(argument.to_string())),
            }
        }
        "cart" | "c" => Action::ViewCart,
        "remove" | "rm" => {
            let argument = argument.ok_or_else(|| AppError::validation("Usage: remove <n>"))?;
            let position = argument.parse::<usize>().map_err(|_| {
                AppError::validation(format!("Not a cart position: {}", argument))
            })?;
            Action::Remove(one_based(position)?)
        }
        "checkout" => Action::Checkout,
        "new" => Action::NewOrder,
        "receipt" => Action::Receipt,
        "exit" | "quit" | "q" => Action::Exit,
        other => {
            return Err(AppError::validation(format!(
                "Unknown command '{}', type `help` for a list",
                other
            )))
        }
    };

    Ok(Some(Command::Dispatch(action)))
}

/// Error text for the customer; cart positions are shown 1-based
fn describe(err: &AppError) -> String {
    match err {
        AppError::IndexOutOfRange { index, len } => {
            format!(
                "There is no line {} in your cart (it has {})",
                index.saturating_add(1),
                len
            )
        }
        other => other.to_string(),
    }
}

fn one_based(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| AppError::validation("Positions start at 1"))
}

pub struct TerminalController<R, W> {
    input: R,
    output: W,
    logo: Option<Logo>,
}

impl<R: BufRead, W: Write> TerminalController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: Option<Logo>) -> Self {
        self.logo = logo;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends.
    /// Mistyped commands and rejected actions are reported and the loop goes on;
    /// I/O failures end the run.
    pub fn run<C: Clock>(&mut self, session: &mut KioskSession<C>) -> Result<()> {
        self.render_welcome()?;
        self.render(session)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                tracing::debug!("Input closed");
                break;
            }

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(self.output, "! {}", err)?;
                    continue;
                }
            };

            let action = match command {
                Command::Help => {
                    writeln!(self.output, "{}", HELP)?;
                    continue;
                }
                Command::Dispatch(action) => action,
            };

            match session.dispatch(action) {
                Ok(Outcome::Updated) => self.render(session)?,
                Ok(Outcome::Receipt(json)) => writeln!(self.output, "{}", json)?,
                Ok(Outcome::Exit) => break,
                Err(err) if err.is_recoverable() => writeln!(self.output, "! {}", describe(&err))?,
                Err(err) => return Err(err),
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    fn render_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "{}", WELCOME)?;
        if let Some(logo) = &self.logo {
            for row in logo.rows() {
                writeln!(self.output, "{}", row)?;
            }
        }
        writeln!(self.output, "Type `help` for commands.")?;
        Ok(())
    }

    /// Draw the session's current screen
    pub fn render<C: Clock>(&mut self, session: &KioskSession<C>) -> Result<()> {
        tracing::debug!(screen = %session.screen(), "Rendering");

        writeln!(self.output)?;
        match session.screen() {
            Screen::Browsing => self.render_menu(session),
            Screen::CartReview => self.render_cart(session),
            Screen::Confirmation(order) => {
                for line in order.confirmation_lines() {
                    writeln!(self.output, "{}", line)?;
                }
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "`new` for another order, `receipt` for JSON, `exit` to leave."
                )?;
                Ok(())
            }
        }
    }

    fn render_menu<C: Clock>(&mut self, session: &KioskSession<C>) -> Result<()> {
        writeln!(self.output, "Order:")?;

        let items = session.catalog().items();
        for category in MenuCategory::ALL {
            if category == MenuCategory::Drink {
                writeln!(self.output, "Beverages")?;
            }
            writeln!(self.output, "{}", category.heading())?;

            for (position, item) in items.iter().enumerate() {
                if item.category == category {
                    writeln!(
                        self.output,
                        "{:>3}. {:<42} [{}]",
                        position + 1,
                        item.button_text(),
                        item.code
                    )?;
                }
            }
        }

        let count = session.cart().len();
        writeln!(
            self.output,
            "\nCart: {} item{} (`cart` to view)",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        Ok(())
    }

    fn render_cart<C: Clock>(&mut self, session: &KioskSession<C>) -> Result<()> {
        writeln!(self.output, "Your Cart")?;

        if session.cart().is_empty() {
            writeln!(self.output, "  (empty)")?;
        }
        for (index, line) in session.cart().lines().iter().enumerate() {
            writeln!(
                self.output,
                "{:>3}. {:<30} {:>8}",
                index + 1,
                line.label,
                line.display_price()
            )?;
        }

        writeln!(self.output)?;
        for line in session.summary().display_lines() {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "\n`remove <n>`, `checkout`, or `menu` to keep ordering.")?;
        Ok(())
    }
}
