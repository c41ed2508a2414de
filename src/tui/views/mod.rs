// Views module - screen-level rendering
//
// One screen, top to bottom:
// intro paragraph, toggle button, cards (only while shown), logs, status.
// Overlays (help modal, toast) draw last.

use super::app::{App, Focus};
use super::components::{self, intro, logs_panel, status_bar, toggle_button};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Height of the logs panel including borders
const LOGS_HEIGHT: u16 = 6;

/// Main UI render function - called on every frame
///
/// Records hit regions on `app` so mouse clicks can be mapped back to the
/// button and the cards drawn in this frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let [intro_area, button_area, cards_area, logs_area, status_area] = Layout::vertical([
        Constraint::Length(intro::HEIGHT),
        Constraint::Length(toggle_button::HEIGHT + 1),
        Constraint::Min(0),
        Constraint::Length(LOGS_HEIGHT),
        Constraint::Length(2),
    ])
    .areas(f.area());

    intro::render(f, inset(intro_area), app.emphasis(), &app.theme);

    app.hit_areas.button = app.button.render(
        f,
        inset(button_area),
        app.show_persons,
        app.focus == Focus::Button,
        &app.theme,
    );

    app.hit_areas.cards = if app.show_persons {
        app.cards.render(
            f,
            inset(cards_area),
            &app.roster,
            app.focus == Focus::Cards,
            &app.theme,
        )
    } else {
        Vec::new()
    };

    logs_panel::render(f, logs_area, &app.log_buffer, &app.theme);
    status_bar::render(f, status_area, app);

    if let Some(ref modal) = app.modal {
        components::help::render(f, f.area(), modal, &app.theme);
    }

    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

/// One column of left margin
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}
