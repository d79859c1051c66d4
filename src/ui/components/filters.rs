//! Filter bar component renderer.
//!
//! Shows the active category and pricing selections, the terminal stand-in
//! for the page's two dropdowns.

use crate::ui::helpers::{display_width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

pub fn render_filter_bar(canvas: &mut Canvas, row: usize, filters: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.push("  Category: ");
    canvas.push(&Theme::fg(&theme.colors.category_fg));
    canvas.push(&filters.category);
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.push("   Pricing: ");
    canvas.push(&Theme::fg(&theme.colors.pricing_fg));
    canvas.push(&filters.pricing);

    let used = 12 + display_width(&filters.category) + 12 + display_width(&filters.pricing);
    canvas.pad(cols.saturating_sub(used));
    canvas.push(Theme::reset());
    row + 1
}
