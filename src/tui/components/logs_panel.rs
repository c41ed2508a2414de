// Logs panel - recent tracing events

use crate::logging::{LogBuffer, LogLevel};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, log_buffer: &LogBuffer, theme: &Theme) {
    let block = Block::default()
        .title(format!(" Logs ({}) ", log_buffer.len()))
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.muted));

    let rows = block.inner(area).height as usize;

    let lines: Vec<Line> = log_buffer
        .tail(rows)
        .into_iter()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => theme.log_error,
                LogLevel::Warn => theme.log_warn,
                _ => theme.muted,
            };
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(theme.muted),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::styled(entry.message, Style::default().fg(theme.foreground)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
