// Color themes for the cards UI
//
// A theme is a flat set of resolved colors. Components never hardcode
// colors; they read them from the theme passed in at render time.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Toggle Button ───────────────────────────────────────
    /// Button background while the list is hidden
    pub button_idle: Color,
    /// Button background while the list is shown
    pub button_active: Color,
    pub button_text: Color,
    pub button_hover: Color,
    pub button_hover_text: Color,

    // ─── Intro Paragraph ─────────────────────────────────────
    /// Foreground for the `red` emphasis class
    pub emphasis: Color,

    // ─── Cards ───────────────────────────────────────────────
    pub card_border: Color,
    pub card_selected: Color,
    pub input: Color,
    pub input_editing: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub foreground: Color,
    pub background: Color,
    pub muted: Color,
    pub highlight: Color,
    pub log_error: Color,
    pub log_warn: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Names accepted by [`Theme::by_name`]
    pub const NAMES: [&'static str; 2] = ["classic", "mono"];

    /// Look up a theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "classic" => Some(Self::classic()),
            "mono" => Some(Self::mono()),
            _ => None,
        }
    }

    /// Green button, light green hover, red emphasis
    pub fn classic() -> Self {
        Self {
            name: "classic",
            button_idle: Color::Green,
            button_active: Color::Red,
            button_text: Color::White,
            button_hover: Color::LightGreen,
            button_hover_text: Color::Black,
            emphasis: Color::Red,
            card_border: Color::Gray,
            card_selected: Color::Cyan,
            input: Color::White,
            input_editing: Color::Yellow,
            foreground: Color::Reset,
            background: Color::Reset,
            muted: Color::DarkGray,
            highlight: Color::Cyan,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            border_type: BorderType::Rounded,
        }
    }

    /// Grayscale for terminals with limited color support
    pub fn mono() -> Self {
        Self {
            name: "mono",
            button_idle: Color::Gray,
            button_active: Color::DarkGray,
            button_text: Color::Black,
            button_hover: Color::White,
            button_hover_text: Color::Black,
            emphasis: Color::White,
            card_border: Color::DarkGray,
            card_selected: Color::White,
            input: Color::Gray,
            input_editing: Color::White,
            foreground: Color::Reset,
            background: Color::Reset,
            muted: Color::DarkGray,
            highlight: Color::White,
            log_error: Color::White,
            log_warn: Color::Gray,
            border_type: BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in Theme::NAMES {
            let theme = Theme::by_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert_eq!(Theme::by_name("MONO").unwrap().name, "mono");
        assert!(Theme::by_name("dracula").is_none());
    }
}
