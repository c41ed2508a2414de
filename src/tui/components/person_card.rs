// Person card - presentational child for one record
//
// Line 1: "I'm {name} and I am {age} years old!" (click deletes)
// Line 2: the name input (click edits; value is always the current name)

use super::formatters::{tail_to_width, truncate_to_width};
use crate::roster::Person;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Rows per card (two content lines plus border)
pub const CARD_HEIGHT: u16 = 4;

const INPUT_PROMPT: &str = "› ";
const CURSOR: &str = "▏";

/// What a card needs to draw itself
pub struct CardProps<'a> {
    pub person: &'a Person,
    pub selected: bool,
    pub editing: bool,
}

/// Clickable rows inside a rendered card
pub struct CardRegions {
    pub text: Rect,
    pub input: Rect,
}

pub fn render(f: &mut Frame, area: Rect, props: &CardProps, theme: &Theme) -> CardRegions {
    let border_style = if props.selected {
        Style::default().fg(theme.card_selected)
    } else {
        Style::default().fg(theme.card_border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = inner.width as usize;
    let intro = truncate_to_width(&props.person.introduction(), width);

    let input_line = if props.editing {
        let room = width.saturating_sub(INPUT_PROMPT.width() + CURSOR.width());
        Line::from(vec![
            Span::styled(INPUT_PROMPT, Style::default().fg(theme.input_editing)),
            Span::styled(
                tail_to_width(&props.person.name, room),
                Style::default()
                    .fg(theme.input_editing)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                CURSOR,
                Style::default()
                    .fg(theme.input_editing)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ])
    } else {
        let room = width.saturating_sub(INPUT_PROMPT.width());
        Line::from(vec![
            Span::styled(INPUT_PROMPT, Style::default().fg(theme.muted)),
            Span::styled(
                truncate_to_width(&props.person.name, room),
                Style::default().fg(theme.input),
            ),
        ])
    };

    let text_style = if props.selected {
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.foreground)
    };

    let paragraph = Paragraph::new(vec![Line::styled(intro, text_style), input_line]);
    f.render_widget(paragraph, inner);

    CardRegions {
        text: Rect::new(inner.x, inner.y, inner.width, inner.height.min(1)),
        input: Rect::new(
            inner.x,
            inner.y.saturating_add(1),
            inner.width,
            inner.height.saturating_sub(1).min(1),
        ),
    }
}
