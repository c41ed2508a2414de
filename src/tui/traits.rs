//! Interactive trait for components that handle keyboard input
//!
//! Child components never touch the roster. They receive keys, update their
//! own view state, and hand an [`Action`] back up to the container, which
//! owns the records and applies it.
//!
//! ```text
//! KeyEvent
//!    │
//!    ▼
//! App (modal, editor, global keys)
//!    │ if not handled
//!    ▼
//! Focused component ──► Handled::Emit(Action) ──► App::apply
//! ```

use super::app::Action;
use crate::roster::Roster;
use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// Not for this component, let the caller try something else
    No,
    /// Consumed with only local view-state changes
    Yes,
    /// Consumed, and the container should apply this action
    Emit(Action),
}

impl Handled {
    pub fn was_handled(&self) -> bool {
        !matches!(self, Handled::No)
    }
}

/// Components that react to keys while focused
pub trait Interactive {
    /// Handle a key event with read access to the current records
    fn handle_key(&mut self, key: KeyEvent, roster: &Roster) -> Handled;

    /// Whether this component can take focus right now
    fn focusable(&self, _show_persons: bool) -> bool {
        true
    }

    /// Keybind hints for the status bar while focused
    fn focus_hint(&self) -> &'static str;
}
