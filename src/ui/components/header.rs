//! Header component renderer.
//!
//! The title row: tool name on the left, result count centered, and the theme
//! toggle glyph at the right edge.

use crate::ui::helpers::{display_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// ```text
///  Tooldeck            3 of 12 tools found                    ☾
/// ```
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = format!(" {} ", header.title);
    let icon = format!(" {} ", header.theme_icon.glyph());
    let count_len = display_width(&header.result_count);
    let title_len = display_width(&title);
    let icon_len = display_width(&icon);

    let centered_start = cols.saturating_sub(count_len) / 2;
    let left_gap = centered_start.saturating_sub(title_len);
    let right_gap = cols.saturating_sub(title_len + left_gap + count_len + icon_len);

    canvas.position_cursor(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.push(&Theme::bg(bg));
    }

    canvas.push(&title);
    canvas.pad(left_gap);
    canvas.push(&header.result_count);
    canvas.pad(right_gap);
    canvas.push(&icon);

    canvas.push(Theme::reset());
    row + 1
}
