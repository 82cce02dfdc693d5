use serde::{Deserialize, Serialize};

/// Every action a hotkey on a content surface can resolve to.
///
/// The input router matches raw key events against the configured key table
/// and produces one of these; navigation actions go back to the surface,
/// structural ones become host commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Surface navigation --
    ToggleDevTools,
    Reload,
    GoBack,
    GoForward,

    // -- Focus --
    BlurTab,
    FocusNextPane,
    FocusPrevPane,
    NextTab,
    PrevTab,

    // -- Structure --
    NewTab,
    SplitRow,
    SplitColumn,
    ClosePane,
}

impl Action {
    /// Human-readable label for menus and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Action::ToggleDevTools => "Toggle Developer Tools",
            Action::Reload => "Reload",
            Action::GoBack => "Back",
            Action::GoForward => "Forward",
            Action::BlurTab => "Leave Tab",
            Action::FocusNextPane => "Focus Next Pane",
            Action::FocusPrevPane => "Focus Previous Pane",
            Action::NextTab => "Next Tab",
            Action::PrevTab => "Previous Tab",
            Action::NewTab => "New Tab",
            Action::SplitRow => "Split Right",
            Action::SplitColumn => "Split Down",
            Action::ClosePane => "Close Pane",
        }
    }

    /// Whether the action is handled by the surface itself rather than the shell.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Action::ToggleDevTools | Action::Reload | Action::GoBack | Action::GoForward
        )
    }
}
