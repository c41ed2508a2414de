// Card list - the rendered roster
//
// Holds selection and the inline editor state. Cards are keyed by person id,
// so the editor follows its record even when earlier cards are deleted.

use super::person_card::{self, CardProps, CARD_HEIGHT};
use crate::roster::{PersonId, Roster};
use crate::tui::app::Action;
use crate::tui::layout::{first_visible_row, Breakpoint};
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Clickable regions of one rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardHit {
    /// Rendered position in the roster
    pub index: usize,
    /// Paragraph row (click deletes)
    pub text: Rect,
    /// Input row (click edits)
    pub input: Rect,
}

/// Selection and editing state for the card list
#[derive(Debug, Default)]
pub struct CardList {
    selected: usize,
    editing: Option<PersonId>,
}

impl CardList {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index;
    }

    /// Keep the selection inside a roster of `len` records
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn editing(&self) -> Option<PersonId> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn start_editing(&mut self, id: PersonId) {
        self.editing = Some(id);
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    /// Drop editor state that points at a removed record
    pub fn forget(&mut self, id: PersonId) {
        if self.editing == Some(id) {
            self.editing = None;
        }
    }

    fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keys while the inline editor is open. Every edit emits the full new
    /// name, so the input always shows what the roster holds.
    fn handle_editor_key(&mut self, id: PersonId, key: KeyEvent, roster: &Roster) -> Handled {
        let Some(current) = roster.position(id).and_then(|i| roster.get(i)) else {
            self.editing = None;
            return Handled::No;
        };

        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.editing = None;
                Handled::Yes
            }
            KeyCode::Backspace => {
                let mut name = current.name.clone();
                name.pop();
                Handled::Emit(Action::NameChanged(id, name))
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut name = current.name.clone();
                name.push(c);
                Handled::Emit(Action::NameChanged(id, name))
            }
            // The editor swallows everything else while open
            _ => Handled::Yes,
        }
    }

    /// Render the cards; returns hit regions for the cards drawn
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        roster: &Roster,
        focused: bool,
        theme: &Theme,
    ) -> Vec<CardHit> {
        if roster.is_empty() {
            let empty = Paragraph::new("No cards left.").style(Style::default().fg(theme.muted));
            f.render_widget(empty, area);
            return Vec::new();
        }

        let columns = Breakpoint::from_width(area.width).card_columns();
        let visible_rows = (area.height / CARD_HEIGHT) as usize;
        if visible_rows == 0 {
            return Vec::new();
        }
        let first_row = first_visible_row(self.selected, columns, visible_rows);

        let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns];
        let mut hits = Vec::new();

        for row in 0..visible_rows {
            let row_area = Rect::new(
                area.x,
                area.y + row as u16 * CARD_HEIGHT,
                area.width,
                CARD_HEIGHT,
            );
            let cells = Layout::horizontal(column_constraints.clone()).split(row_area);

            for (col, cell) in cells.iter().enumerate() {
                let index = (first_row + row) * columns + col;
                let Some(person) = roster.get(index) else {
                    return hits;
                };

                let props = CardProps {
                    person,
                    selected: focused && index == self.selected,
                    editing: self.editing == Some(person.id),
                };
                let regions = person_card::render(f, *cell, &props, theme);
                hits.push(CardHit {
                    index,
                    text: regions.text,
                    input: regions.input,
                });
            }
        }

        hits
    }
}

impl Interactive for CardList {
    fn handle_key(&mut self, key: KeyEvent, roster: &Roster) -> Handled {
        if let Some(id) = self.editing {
            return self.handle_editor_key(id, key, roster);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next(roster.len());
                Handled::Yes
            }
            KeyCode::Home => {
                self.selected = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.selected = roster.len().saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char('e') => match roster.get(self.selected) {
                Some(person) => {
                    self.editing = Some(person.id);
                    Handled::Yes
                }
                None => Handled::No,
            },
            KeyCode::Delete | KeyCode::Char('d') if self.selected < roster.len() => {
                Handled::Emit(Action::DeletePerson(self.selected))
            }
            _ => Handled::No,
        }
    }

    fn focusable(&self, show_persons: bool) -> bool {
        show_persons
    }

    fn focus_hint(&self) -> &'static str {
        if self.editing.is_some() {
            "type:rename  Backspace:erase  Enter/Esc:done"
        } else {
            "↑↓:select  e:edit  d:delete  Tab:button  ?:help"
        }
    }
}
