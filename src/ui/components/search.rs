//! Search bar component renderer.
//!
//! A bordered three-line box showing the search text as typed.

use crate::ui::helpers::{display_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Placeholder shown while the query is empty.
const PLACEHOLDER: &str = "Search tools...";

/// Renders the search box at `row` and returns the next free row (`row + 3`).
///
/// ```text
///   ┌──────────────────────────────┐
///   │ Search: image gen            │
///   └──────────────────────────────┘
/// ```
pub fn render_search_bar(canvas: &mut Canvas, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    canvas.position_cursor(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&Theme::fg(&theme.colors.search_bar_border));
    canvas.push(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    let (text, color) = if search.query.is_empty() {
        (format!(" {PLACEHOLDER}"), &theme.colors.text_dim)
    } else {
        (format!(" Search: {}", search.query), &theme.colors.text_normal)
    };
    let text = truncate(&text, inner_width);

    canvas.position_cursor(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&Theme::fg(&theme.colors.search_bar_border));
    canvas.push("│");
    canvas.push(&Theme::fg(color));
    canvas.push(&text);
    canvas.pad(inner_width.saturating_sub(display_width(&text)));
    canvas.push(&Theme::fg(&theme.colors.search_bar_border));
    canvas.push("│");
    canvas.push(Theme::reset());

    canvas.position_cursor(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&Theme::fg(&theme.colors.search_bar_border));
    canvas.push(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    row + 3
}
