// Status bar component
//
// Renders card count, visibility and the focused component's key hints.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Status line text for the current state
///
/// Narrow terminals drop the emphasis classes and keep the hints.
pub fn status_text(app: &App, width: u16) -> String {
    let count = app.roster.len();
    let noun = if count == 1 { "card" } else { "cards" };
    let visibility = if app.show_persons { "shown" } else { "hidden" };
    let hint = app.focus_hint();

    if Breakpoint::from_width(width).at_least(Breakpoint::Normal) {
        let classes = app.emphasis().class_name();
        let classes = if classes.is_empty() {
            "-".to_string()
        } else {
            classes
        };
        format!(
            " {} {} │ {} │ class: {} │ {}",
            count, noun, visibility, classes, hint
        )
    } else {
        format!(" {} {} │ {}", count, visibility, hint)
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(status_text(app, area.width))
        .style(Style::default().fg(app.theme.muted))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogBuffer;
    use crate::roster::Roster;
    use crate::tui::theme::Theme;

    #[test]
    fn shows_count_visibility_and_classes() {
        let mut app = App::new(Roster::seeded(), false, Theme::default(), LogBuffer::new());
        let text = status_text(&app, 120);
        assert!(text.starts_with(" 4 cards │ hidden │ class: - │"));

        app.toggle_persons();
        app.delete_person(0);
        app.delete_person(0);
        app.delete_person(0);
        let text = status_text(&app, 120);
        assert!(text.starts_with(" 1 card │ shown │ class: red bold │"));

        let narrow = status_text(&app, 40);
        assert!(narrow.starts_with(" 1 shown │"));
    }
}
