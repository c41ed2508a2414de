// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Help => " Keys ",
        }
    }

    /// Two-column (key, description) rows shown in the modal body
    pub fn rows(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Modal::Help => &[
                ("t", "Hide or unhide the cards"),
                ("Enter / Space", "Press the focused button"),
                ("Tab", "Move focus between button and cards"),
                ("↑ ↓ / j k", "Select a card"),
                ("e / Enter", "Edit the selected name"),
                ("Esc / Enter", "Finish editing"),
                ("d / Del", "Delete the selected card"),
                ("click", "Button toggles, card text deletes, input edits"),
                ("?", "Toggle this help"),
                ("q / Ctrl+C", "Quit"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_dismiss_keys() {
        let mut modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
    }
}
