/// How the customer pointed at a menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSelection {
    /// Item code such as `combo-1`
    Code(String),
    /// 0-based position in the full menu listing
    Position(usize),
}

/// One user action. Each maps to a single state transition of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ShowMenu,
    Add(MenuSelection),
    ViewCart,
    /// 0-based cart position
    Remove(usize),
    Checkout,
    NewOrder,
    Receipt,
    Exit,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ShowMenu => "menu",
            Action::Add(_) => "add",
            Action::ViewCart => "cart",
            Action::Remove(_) => "remove",
            Action::Checkout => "checkout",
            Action::NewOrder => "new",
            Action::Receipt => "receipt",
            Action::Exit => "exit",
        }
    }
}

/// What the driver should do after an action was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed (or was re-shown); render the current screen
    Updated,
    /// Order receipt as pretty-printed JSON
    Receipt(String),
    /// Leave the kiosk
    Exit,
}
