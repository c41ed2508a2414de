// Intro paragraph
//
// The test paragraph carries the roster's emphasis classes: `red` colors it,
// `bold` adds weight.

use crate::roster::Emphasis;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const HEIGHT: u16 = 3;

/// Style for the test paragraph under the given classes
pub fn emphasis_style(emphasis: Emphasis, theme: &Theme) -> Style {
    let mut style = Style::default().fg(theme.foreground);
    if emphasis.red {
        style = style.fg(theme.emphasis);
    }
    if emphasis.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

pub fn render(f: &mut Frame, area: Rect, emphasis: Emphasis, theme: &Theme) {
    let code = Style::default()
        .fg(theme.muted)
        .add_modifier(Modifier::ITALIC);

    let lines = vec![
        Line::styled("This is a test paragraph.", emphasis_style(emphasis, theme)),
        Line::default(),
        Line::from(vec![
            Span::raw("Hello. To get started, edit "),
            Span::styled("src/App.js", code),
            Span::raw(" and save to reload."),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_map_to_style() {
        let theme = Theme::classic();

        let plain = emphasis_style(Emphasis::for_len(4), &theme);
        assert_eq!(plain.fg, Some(theme.foreground));
        assert!(!plain.add_modifier.contains(Modifier::BOLD));

        let red = emphasis_style(Emphasis::for_len(2), &theme);
        assert_eq!(red.fg, Some(theme.emphasis));
        assert!(!red.add_modifier.contains(Modifier::BOLD));

        let both = emphasis_style(Emphasis::for_len(1), &theme);
        assert_eq!(both.fg, Some(theme.emphasis));
        assert!(both.add_modifier.contains(Modifier::BOLD));
    }
}
