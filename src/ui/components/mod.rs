//! Composable terminal component renderers.
//!
//! # Components
//!
//! - [`header`]: Title, result count and theme glyph
//! - [`search`]: Search input box
//! - [`filters`]: Active category and pricing
//! - [`cards`]: One row per tool card, plus the selected tool's link
//! - [`empty`]: Empty state placeholder
//! - [`footer`]: Key hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Filter Bar]
//! [Border]
//! [Card Headers]
//! [Card Rows | Empty State]
//! [Blank padding]
//! [Link line]
//! [Border]
//! [Footer]
//! ```

mod cards;
mod empty;
mod filters;
mod footer;
mod header;
mod search;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Presentation, TerminalView};

use cards::{render_card_headers, render_cards, render_link_line};
use empty::render_empty_state;
use filters::render_filter_bar;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;

/// Rows taken by everything except the card rows.
pub const CHROME_ROWS: usize = 13;

fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(color));
    canvas.push(&"─".repeat(cols));
    canvas.push(Theme::reset());
    row + 1
}

/// Draws the full screen into `canvas`.
pub fn render_screen(canvas: &mut Canvas, view: &TerminalView, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = render_header(canvas, current_row, &view.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);
    current_row = render_search_bar(canvas, current_row, &view.search_bar, theme, cols);
    current_row = render_filter_bar(canvas, current_row, &view.filter_bar, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);

    let selected_card = match &view.view.content {
        Presentation::Cards(cards) => {
            current_row = render_card_headers(canvas, current_row, theme);
            render_cards(canvas, current_row, cards, view.selected_index, theme, cols);
            cards.get(view.selected_index)
        }
        Presentation::Empty(empty) => {
            render_empty_state(canvas, current_row, empty, theme, cols);
            None
        }
    };

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let link_row = border_row.saturating_sub(1);

    render_link_line(canvas, link_row, selected_card, theme, cols);
    render_border(canvas, border_row, &theme.colors.border, cols);
    render_footer(canvas, footer_row, &view.footer, theme, cols);
}
