// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, timer ticks)
// - Routing input to the container and its children

pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod traits;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done, even if the loop failed.
pub async fn run_tui(config: &Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Each iteration draws a frame, then waits for either terminal input or
/// the redraw tick. Every input event is fully applied before the next one
/// is read.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        Ok(_) => {}
                        Err(e) => tracing::warn!("Failed to read terminal event: {}", e),
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            tracing::debug!("Quit requested");
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Editor → Global → Focused component
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return;
    }

    // Ctrl+C always quits, even mid-edit
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return;
    }

    // Layer 2: The inline editor takes raw keys (no debounce while typing)
    if app.cards.is_editing() && app.dispatch_to_editor(key_event) {
        return;
    }

    // Layer 3: Global keys
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: Focused component
    if app.handle_key_press(key_event.code) {
        app.dispatch_to_focused(key_event);
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }

    match mouse_event.kind {
        MouseEventKind::Moved => app.hover(mouse_event.column, mouse_event.row),
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse_event.column, mouse_event.row)
        }
        MouseEventKind::ScrollUp if app.show_persons => {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        }
        MouseEventKind::ScrollDown if app.show_persons => {
            app.dispatch_to_focused(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        _ => {}
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    if modal.handle_input(key_event.code) == ModalAction::Close {
        app.modal = None;
    }

    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let key = key_event.code;

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('?') => {
            if app.handle_key_press(key) {
                app.modal = Some(Modal::help());
            }
            true
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            if app.handle_key_press(key) {
                app.toggle_persons();
            }
            true
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::app::Focus;
    use super::theme::Theme;
    use crate::roster::Roster;

    fn app() -> App {
        App::new(Roster::seeded(), false, Theme::default(), LogBuffer::new())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
        // Simulate release so debounced keys can fire again immediately
        let mut release = KeyEvent::new(code, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key_event(app, release);
    }

    fn names(app: &App) -> Vec<String> {
        app.roster.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn toggle_via_global_key_and_button() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        assert!(app.show_persons);

        assert_eq!(app.focus, Focus::Button);
        press(&mut app, KeyCode::Enter);
        assert!(!app.show_persons);
    }

    #[test]
    fn full_edit_session() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Cards);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('e'));
        assert!(app.cards.is_editing());

        // 'q' and 't' are text while editing
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('t'));
        assert!(!app.should_quit);
        assert!(app.show_persons);

        press(&mut app, KeyCode::Esc);
        assert!(!app.cards.is_editing());
        assert_eq!(names(&app), vec!["Andi", "Peterqt", "John", "Moni"]);
    }

    #[test]
    fn delete_via_keyboard() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(names(&app), vec!["John", "Moni"]);
    }

    #[test]
    fn modal_swallows_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.modal.is_some());

        press(&mut app, KeyCode::Char('t'));
        assert!(!app.show_persons);

        press(&mut app, KeyCode::Esc);
        assert!(app.modal.is_none());
    }

    #[test]
    fn ctrl_c_quits_while_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert!(app.cards.is_editing());

        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert_eq!(app.roster.get(0).unwrap().name, "Andi");
    }

    #[test]
    fn held_delete_fires_once() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Tab);

        // Presses without release, as most terminals report a held key
        for _ in 0..5 {
            handle_key_event(
                &mut app,
                KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE),
            );
        }
        assert_eq!(app.roster.len(), 3);
    }
}
