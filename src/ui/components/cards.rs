//! Card list component renderer.
//!
//! Each tool card is drawn as one row: fallback glyph (terminals cannot show
//! the logo image), name, category, pricing and a truncated description.

use crate::ui::helpers::{self, display_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToolCard;

const NAME_WIDTH: usize = 22;
const CATEGORY_WIDTH: usize = 14;
const PRICING_WIDTH: usize = 10;

/// Width taken by the cursor marker and the `[X] ` glyph box.
const LEAD_WIDTH: usize = 6;

/// Renders the column headers and returns the next free row.
pub fn render_card_headers(canvas: &mut Canvas, row: usize, theme: &Theme) -> usize {
    canvas.position_cursor(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    canvas.pad(LEAD_WIDTH);
    canvas.push(&format!(
        "{:<nw$}{:<cw$}{:<pw$}DESCRIPTION",
        "NAME",
        "CATEGORY",
        "PRICING",
        nw = NAME_WIDTH,
        cw = CATEGORY_WIDTH,
        pw = PRICING_WIDTH
    ));
    canvas.push(Theme::reset());
    row + 1
}

/// Renders one row per card and returns the row after the last one.
pub fn render_cards(canvas: &mut Canvas, row: usize, cards: &[ToolCard], selected: usize, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for (index, card) in cards.iter().enumerate() {
        current_row = render_card(canvas, current_row, card, index == selected, theme, cols);
    }
    current_row
}

fn render_card(canvas: &mut Canvas, row: usize, card: &ToolCard, is_selected: bool, theme: &Theme, cols: usize) -> usize {
    canvas.position_cursor(row, 1);

    let base_fg = if is_selected {
        canvas.push(&Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };
    canvas.push(&Theme::fg(base_fg));

    canvas.push(if is_selected { "▸ " } else { "  " });
    let glyph = if card.fallback_glyph.is_empty() { "?" } else { card.fallback_glyph.as_str() };
    canvas.push(&format!("[{glyph}] "));

    let name = truncate(&card.name, NAME_WIDTH - 2);
    if display_width(&name) == display_width(&card.name) {
        helpers::render_highlighted_text(canvas, &name, &card.highlight_ranges, theme, is_selected);
    } else {
        canvas.push(&name);
    }
    canvas.pad(NAME_WIDTH - display_width(&name));

    let color = (!is_selected).then_some(theme.colors.category_fg.as_str());
    render_column(canvas, &card.category_label, CATEGORY_WIDTH, color);
    let color = (!is_selected).then_some(theme.colors.pricing_fg.as_str());
    render_column(canvas, &card.pricing_label, PRICING_WIDTH, color);

    let used = LEAD_WIDTH + NAME_WIDTH + CATEGORY_WIDTH + PRICING_WIDTH;
    let description = truncate(&card.description, cols.saturating_sub(used));
    if !is_selected {
        canvas.push(&Theme::fg(&theme.colors.text_dim));
    }
    canvas.push(&description);
    canvas.pad(cols.saturating_sub(used + display_width(&description)));

    canvas.push(Theme::reset());
    row + 1
}

/// Draws `text` left-aligned in a fixed-width column, in `color` if given.
fn render_column(canvas: &mut Canvas, text: &str, width: usize, color: Option<&str>) {
    if let Some(color) = color {
        canvas.push(&Theme::fg(color));
    }
    let text = truncate(text, width - 2);
    canvas.push(&text);
    canvas.pad(width - display_width(&text));
}

/// Renders the selected card's website on one line.
pub fn render_link_line(canvas: &mut Canvas, row: usize, card: Option<&ToolCard>, theme: &Theme, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    let text = card.map_or_else(String::new, |c| truncate(&format!("  ↗ {}", c.link.href), cols));
    canvas.push(&Theme::fg(&theme.colors.link_fg));
    canvas.push(&text);
    canvas.pad(cols.saturating_sub(display_width(&text)));
    canvas.push(Theme::reset());
    row + 1
}
