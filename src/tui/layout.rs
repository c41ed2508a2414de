/// Responsive breakpoint system for TUI layout decisions.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100+ cols: Full terminal
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    /// Cards per row in the card grid
    pub fn card_columns(&self) -> usize {
        match self {
            Breakpoint::Wide => 2,
            _ => 1,
        }
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// First grid row to draw so that `selected` stays visible.
pub fn first_visible_row(selected: usize, columns: usize, visible_rows: usize) -> usize {
    let columns = columns.max(1);
    let visible_rows = visible_rows.max(1);
    let selected_row = selected / columns;
    selected_row.saturating_sub(visible_rows - 1)
}
