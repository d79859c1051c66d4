//! Empty state component renderer.
//!
//! Shown in the result area when no tool matches the active filters.

use crate::ui::helpers::{display_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Glyph standing in for the `search` icon.
const SEARCH_GLYPH: &str = "⌕";

/// Renders the icon, heading and hint centered, starting two rows below
/// `row`. Returns the row after the hint.
pub fn render_empty_state(canvas: &mut Canvas, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let icon = if empty.icon == "search" { SEARCH_GLYPH } else { empty.icon.as_str() };
    let mut current_row = row + 2;

    for (text, styles) in [
        (icon, vec![Theme::fg(&theme.colors.empty_state_fg)]),
        (empty.heading.as_str(), vec![Theme::bold().to_string(), Theme::fg(&theme.colors.empty_state_fg)]),
        (empty.hint.as_str(), vec![Theme::dim().to_string(), Theme::fg(&theme.colors.text_dim)]),
    ] {
        let len = display_width(text);
        let padding = cols.saturating_sub(len) / 2;

        canvas.position_cursor(current_row, 1);
        for style in &styles {
            canvas.push(style);
        }
        canvas.pad(padding);
        canvas.push(text);
        canvas.pad(cols.saturating_sub(padding + len));
        canvas.push(Theme::reset());
        current_row += 1;
    }

    current_row
}
