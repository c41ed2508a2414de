// Key debouncing for action keys
//
// Most terminals only report key presses, never releases, so holding a key
// produces a stream of presses. Navigation and typing should follow that
// stream; destructive or toggling actions should fire once per press.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Debounce window for action keys
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// How a key reacts to repeated presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Every press triggers
    Immediate,
    /// Presses within the window after a trigger are swallowed until release
    Debounced(Duration),
}

/// Tracks per-key trigger times
pub struct InputHandler {
    last_triggered: HashMap<KeyCode, Instant>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_triggered: HashMap::new(),
            behaviors: HashMap::new(),
        }
    }

    pub fn configure_keys(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the press should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.handle_key_press_at(key, Instant::now())
    }

    fn handle_key_press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::Immediate);

        match behavior {
            KeyBehavior::Immediate => true,
            KeyBehavior::Debounced(window) => match self.last_triggered.get(&key) {
                Some(last) if now.duration_since(*last) < window => false,
                _ => {
                    self.last_triggered.insert(key, now);
                    true
                }
            },
        }
    }

    /// Release resets the debounce so the next press fires immediately
    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.last_triggered.remove(&key);
    }

    /// Action keys debounced, everything else immediate
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();
        handler.configure_keys(
            &[
                KeyCode::Enter,
                KeyCode::Tab,
                KeyCode::BackTab,
                KeyCode::Delete,
                KeyCode::Char(' '),
                KeyCode::Char('t'),
                KeyCode::Char('d'),
                KeyCode::Char('e'),
                KeyCode::Char('q'),
                KeyCode::Char('?'),
            ],
            KeyBehavior::Debounced(ACTION_DEBOUNCE),
        );
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}
