// TUI application state
//
// `App` is the container: it owns the roster and the visibility flag, and it
// is the only place records change. Child components hold view state only
// (hover, selection, which card is being edited) and send `Action`s up.

use super::components::card_list::{CardHit, CardList};
use super::components::toggle_button::ToggleButton;
use super::components::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use super::theme::Theme;
use super::traits::{Handled, Interactive};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::roster::{Emphasis, Person, PersonId, Roster};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Position, Rect};

/// State changes children ask the container to make
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip list visibility
    TogglePersons,
    /// Remove the card at this rendered position
    DeletePerson(usize),
    /// Replace the name of this record
    NameChanged(PersonId, String),
}

/// Which component receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Button,
    Cards,
}

/// Screen regions from the last frame, for mouse hit testing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub button: Rect,
    pub cards: Vec<CardHit>,
}

/// Main application state for the TUI
pub struct App {
    /// The records
    pub roster: Roster,

    /// Whether the card list is rendered
    pub show_persons: bool,

    pub focus: Focus,
    pub button: ToggleButton,
    pub cards: CardList,

    pub theme: Theme,
    pub log_buffer: LogBuffer,
    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    pub hit_areas: HitAreas,
    pub should_quit: bool,

    input_handler: InputHandler,
}

impl App {
    pub fn new(roster: Roster, show_persons: bool, theme: Theme, log_buffer: LogBuffer) -> Self {
        Self {
            roster,
            show_persons,
            focus: Focus::default(),
            button: ToggleButton::default(),
            cards: CardList::default(),
            theme,
            log_buffer,
            modal: None,
            toast: None,
            hit_areas: HitAreas::default(),
            should_quit: false,
            input_handler: InputHandler::default(),
        }
    }

    /// Build from config: fresh roster from the seeds, theme by name
    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Self {
        let theme = Theme::by_name(&config.theme).unwrap_or_else(|| {
            tracing::warn!(
                theme = %config.theme,
                "Unknown theme, using classic (available: {})",
                Theme::NAMES.join(", ")
            );
            Theme::default()
        });
        let roster = Roster::from_seeds(&config.persons);
        tracing::debug!(count = roster.len(), theme = theme.name, "Roster initialized");
        Self::new(roster, config.show_persons, theme, log_buffer)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Container operations
    // ─────────────────────────────────────────────────────────────────────

    /// Show or hide the card list
    pub fn toggle_persons(&mut self) {
        self.show_persons = !self.show_persons;
        if !self.show_persons {
            self.cards.stop_editing();
            self.focus = Focus::Button;
        }
        tracing::info!(show = self.show_persons, "Toggled cards");
    }

    /// Rename the record with `id`; position and other records are untouched
    pub fn name_changed(&mut self, id: PersonId, name: String) {
        if self.roster.rename(id, name) {
            tracing::debug!(%id, "Name changed");
        } else {
            tracing::warn!(%id, "Name change for unknown person");
        }
    }

    /// Remove the card at the rendered position `index`
    pub fn delete_person(&mut self, index: usize) -> Option<Person> {
        let removed = self.roster.remove_at(index)?;
        self.cards.forget(removed.id);
        self.cards.clamp(self.roster.len());
        if self.roster.is_empty() {
            self.focus = Focus::Button;
        }
        tracing::info!(index, name = %removed.name, "Deleted person");
        self.show_toast(format!("Removed {}", display_name(&removed.name)));
        Some(removed)
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::TogglePersons => self.toggle_persons(),
            Action::DeletePerson(index) => {
                self.delete_person(index);
            }
            Action::NameChanged(id, name) => self.name_changed(id, name),
        }
    }

    /// Emphasis classes for the intro paragraph
    pub fn emphasis(&self) -> Emphasis {
        self.roster.emphasis()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────

    /// Hint text of the focused component
    pub fn focus_hint(&self) -> &'static str {
        match self.focus {
            Focus::Button => self.button.focus_hint(),
            Focus::Cards => self.cards.focus_hint(),
        }
    }

    /// Tab between the button and the cards (cards only while shown)
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Button if self.cards.focusable(self.show_persons) && !self.roster.is_empty() => {
                Focus::Cards
            }
            _ => Focus::Button,
        };
    }

    /// Route a key to the focused component and apply what it emits
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> bool {
        let handled = match self.focus {
            Focus::Button => self.button.handle_key(key, &self.roster),
            Focus::Cards => self.cards.handle_key(key, &self.roster),
        };
        self.finish(handled)
    }

    /// Route a key to the inline editor
    pub fn dispatch_to_editor(&mut self, key: KeyEvent) -> bool {
        let handled = self.cards.handle_key(key, &self.roster);
        self.finish(handled)
    }

    fn finish(&mut self, handled: Handled) -> bool {
        let was_handled = handled.was_handled();
        if let Handled::Emit(action) = handled {
            self.apply(action);
        }
        was_handled
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mouse
    // ─────────────────────────────────────────────────────────────────────

    /// Update hover state for the pointer position
    pub fn hover(&mut self, column: u16, row: u16) {
        self.button.hovered = self.hit_areas.button.contains(Position::new(column, row));
    }

    /// Left click: button toggles, card text deletes, card input edits
    pub fn click(&mut self, column: u16, row: u16) {
        let pos = Position::new(column, row);
        if self.hit_areas.button.contains(pos) {
            self.focus = Focus::Button;
            self.toggle_persons();
            return;
        }

        if !self.show_persons {
            return;
        }

        let hit = self
            .hit_areas
            .cards
            .iter()
            .find(|hit| hit.text.contains(pos) || hit.input.contains(pos))
            .cloned();

        if let Some(hit) = hit {
            if hit.text.contains(pos) {
                self.delete_person(hit.index);
            } else if let Some(person) = self.roster.get(hit.index) {
                let id = person.id;
                self.focus = Focus::Cards;
                self.cards.select(hit.index);
                self.cards.start_editing(id);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Chrome
    // ─────────────────────────────────────────────────────────────────────

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic housekeeping between frames
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}

/// Empty names render as a placeholder in messages
fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "(unnamed)"
    } else {
        name
    }
}
