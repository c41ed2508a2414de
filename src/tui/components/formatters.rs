// Text formatters
//
// Shared helpers for fitting text into terminal cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` display columns, ending with `…`
/// when something was cut.
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate_to_width("Hello world", 8), "Hello w…");
/// assert_eq!(truncate_to_width("Hi", 8), "Hi");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Keep the end of `text` visible within `max_width` columns, starting with
/// `…` when the front was cut. Used for the input line so the cursor end
/// stays on screen while typing.
pub fn tail_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut kept: Vec<char> = Vec::new();
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(ch);
    }
    let mut out = String::from('…');
    out.extend(kept.into_iter().rev());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("Hello world", 8), "Hello w…");
        assert_eq!(truncate_to_width("Hello", 5), "Hello");
        assert_eq!(truncate_to_width("Hello", 0), "");
    }

    #[test]
    fn wide_chars_count_double() {
        // Each CJK char is two columns
        assert_eq!(truncate_to_width("日本語です", 5), "日本…");
    }

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail_to_width("Maximilian", 6), "…ilian");
        assert_eq!(tail_to_width("Moni", 6), "Moni");
    }
}
