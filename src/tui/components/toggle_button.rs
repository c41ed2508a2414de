// Toggle button - "Hide/Unhide cards"
//
// Green while the list is hidden, red while it is shown, light green while
// focused or under the mouse pointer.

use crate::roster::Roster;
use crate::tui::app::Action;
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const LABEL: &str = "Hide/Unhide cards";

/// Rows the button occupies (label plus border)
pub const HEIGHT: u16 = 3;

/// Button view state
#[derive(Debug, Default)]
pub struct ToggleButton {
    /// Mouse pointer is over the button
    pub hovered: bool,
}

impl ToggleButton {
    /// Background and text color for the current state
    pub fn style(&self, show_persons: bool, focused: bool, theme: &Theme) -> Style {
        if self.hovered || focused {
            Style::default()
                .bg(theme.button_hover)
                .fg(theme.button_hover_text)
        } else if show_persons {
            Style::default()
                .bg(theme.button_active)
                .fg(theme.button_text)
        } else {
            Style::default().bg(theme.button_idle).fg(theme.button_text)
        }
    }

    /// Render at the left of `area`; returns the clickable region
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        show_persons: bool,
        focused: bool,
        theme: &Theme,
    ) -> Rect {
        // Two cells of padding each side plus the border
        let width = (LABEL.width() as u16 + 6).min(area.width);
        let button_area = Rect::new(area.x, area.y, width, HEIGHT.min(area.height));

        let border_style = if focused {
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(border_style);

        let button = Paragraph::new(LABEL)
            .alignment(Alignment::Center)
            .style(self.style(show_persons, focused, theme))
            .block(block);

        f.render_widget(button, button_area);
        button_area
    }
}

impl Interactive for ToggleButton {
    fn handle_key(&mut self, key: KeyEvent, _roster: &Roster) -> Handled {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Handled::Emit(Action::TogglePersons),
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> &'static str {
        "Enter/Space:toggle  Tab:cards  ?:help  q:quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn color_follows_visibility_and_hover() {
        let theme = Theme::classic();
        let mut button = ToggleButton::default();

        assert_eq!(button.style(false, false, &theme).bg, Some(theme.button_idle));
        assert_eq!(button.style(true, false, &theme).bg, Some(theme.button_active));

        button.hovered = true;
        assert_eq!(button.style(true, false, &theme).bg, Some(theme.button_hover));
        assert_eq!(button.style(false, false, &theme).fg, Some(theme.button_hover_text));
    }

    #[test]
    fn keyboard_focus_uses_hover_colors() {
        let theme = Theme::classic();
        let button = ToggleButton::default();

        for show_persons in [false, true] {
            let style = button.style(show_persons, true, &theme);
            assert_eq!(style.bg, Some(theme.button_hover));
            assert_eq!(style.fg, Some(theme.button_hover_text));
        }
    }

    #[test]
    fn enter_and_space_emit_toggle() {
        let mut button = ToggleButton::default();
        let roster = Roster::seeded();
        for code in [KeyCode::Enter, KeyCode::Char(' ')] {
            assert_eq!(
                button.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &roster),
                Handled::Emit(Action::TogglePersons)
            );
        }
        assert_eq!(
            button.handle_key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE), &roster),
            Handled::No
        );
    }
}
