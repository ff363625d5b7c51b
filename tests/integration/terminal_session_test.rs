// Integration tests for the terminal front-end
//
// Feeds scripted input through TerminalController and checks what the
// customer would see.

#[path = "../helpers/mod.rs"]
mod helpers;

use burger_kiosk::kiosk::{KioskSession, Logo, Screen, TerminalController};
use helpers::TestDataFactory;
use std::io::Cursor;

fn run_script(script: &str, logo: Option<Logo>) -> String {
    let mut session = TestDataFactory::session(11);
    let mut terminal =
        TerminalController::new(Cursor::new(script.to_string()), Vec::new()).with_logo(logo);

    terminal.run(&mut session).unwrap();
    String::from_utf8(terminal.into_output()).unwrap()
}

#[test]
fn test_menu_is_shown_on_start() {
    let output = run_script("exit\n", None);

    assert!(output.starts_with("Welcome to In-N-Out Burger!"));
    assert!(output.contains("Combos"));
    assert!(output.contains("Double Double, Fries, Medium Drink $9.70"));
    assert!(output.contains("French Fries $2.20"));
    assert!(output.contains("Shakes $2.90"));
    assert!(output.contains("X-Large $2.55"));
    assert!(output.contains("Cart: 0 items"));
}

#[test]
fn test_full_order_through_terminal() {
    let output = run_script(
        "add combo-1\nadd 7\ncart\ncheckout\n",
        None,
    );

    assert!(output.contains("Total: $11.90"));
    assert!(output.contains("Tax: $0.95"));
    assert!(output.contains("Total with Tax: $12.85"));
    assert!(output.contains("Order Number: "));
    assert!(output.contains("2025-11-01 12:34:56"));
    assert!(output.contains("Double Double Combo: $9.70"));
    assert!(output.contains("Directions: Pay at the terminal"));

    // Input ended without `exit`; the kiosk still closes cleanly
    assert!(output.trim_end().ends_with("Thank you for your order!"));
}

#[test]
fn test_errors_do_not_end_the_session() {
    let output = run_script(
        "dance\ncart\nremove 3\nremove 0\nadd salad\ncheckout\nexit\n",
        None,
    );

    assert!(output.contains("! Validation error: Unknown command 'dance'"));
    assert!(output.contains("! There is no line 3 in your cart (it has 0)"));
    assert!(output.contains("! Validation error: Positions start at 1"));
    assert!(output.contains("! Not found: Menu item 'salad'"));
    assert!(output.contains("Total with Tax: $0.00"));
}

#[test]
fn test_remove_then_review() {
    let output = run_script("add hamburger\nadd shake\nadd small\ncart\nremove 2\nexit\n", None);

    let last_cart = output.rsplit("Your Cart").next().unwrap();
    assert!(last_cart.contains("Hamburger"));
    assert!(last_cart.contains("Small $2.00"));
    assert!(!last_cart.contains("Shake"));
    assert!(last_cart.contains("Total: $5.35"));
}

#[test]
fn test_logo_is_drawn_when_present() {
    let logo = Logo::from_text("*** BURGERS ***");
    let output = run_script("exit\n", logo);
    assert!(output.contains("*** BURGERS ***"));
}

#[test]
fn test_help_and_receipt() {
    let output = run_script("help\ncart\ncheckout\nreceipt\nnew\nexit\n", None);

    assert!(output.contains("remove <n>"));
    assert!(output.contains("\"total_with_tax\""));
    assert!(output.contains("Cart: 0 items"));
}

#[test]
fn test_standard_session_starts_browsing() {
    let session = KioskSession::standard().unwrap();
    assert_eq!(session.screen(), &Screen::Browsing);
    assert_eq!(session.catalog().len(), 12);
}
