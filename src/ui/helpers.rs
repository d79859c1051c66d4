//! Shared terminal rendering utilities.
//!
//! Terminal components draw into a [`Canvas`], an ANSI string buffer, rather
//! than straight to stdout. The plugin prints the finished buffer once per
//! frame; tests inspect it.

use crate::ui::theme::Theme;

/// ANSI output buffer with cursor positioning.
#[derive(Debug, Default)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to `row`, `col` (both 1-indexed).
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Number of characters `text` occupies, ignoring escape sequences.
///
/// Every `char` counts as one cell. Wide CJK characters and emoji take two
/// cells in most terminals, so rows containing them can overrun their column
/// by one cell per wide character.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `max` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Draws `text` with the given character ranges highlighted.
///
/// Ranges use character indices with an exclusive end. Highlighting is
/// skipped on the selected row so it does not fight the selection colors.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        canvas.push(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal: String = chars[current_pos..start].iter().collect();
        canvas.push(&normal);

        canvas.push(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.push(&Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start..end].iter().collect();
        canvas.push(&highlighted);
        canvas.push(Theme::reset());
        canvas.push(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        canvas.push(&remaining);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long description", 9), "a long...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_width_counts_chars_not_cells() {
        assert_eq!(display_width("日本"), 2);
        assert_eq!(display_width("\u{1F600}x"), 2);
        assert_eq!(truncate("日本語のツール", 5), "日本...");
        assert_eq!(truncate("\u{1F600}\u{1F600}\u{1F600}", 2), "\u{1F600}\u{1F600}");
    }

    #[test]
    fn test_highlighted_text_keeps_all_characters() {
        let theme = Theme::bundled(crate::ui::ThemeMode::Dark);
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "Coder", &[(0, 3)], &theme, false);
        let out = canvas.into_string();
        assert!(out.contains("Cod"));
        assert!(out.ends_with("er"));
    }

    #[test]
    fn test_selected_row_is_not_highlighted() {
        let theme = Theme::bundled(crate::ui::ThemeMode::Light);
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "Coder", &[(0, 3)], &theme, true);
        assert_eq!(canvas.as_str(), "Coder");
    }
}
