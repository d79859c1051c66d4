//! Rendering the filtered view.
//!
//! [`render`] turns a filtered view into a [`ViewModel`]; it is pure and
//! deterministic. A [`Presenter`] then draws the view model onto a concrete
//! surface, replacing whatever it drew before.
//!
//! ```text
//! filtered view ─► render ─► ViewModel ─► present ─► Presenter
//! ```

use crate::domain::ToolRecord;
use crate::ui::theme::ThemeMode;
use crate::ui::viewmodel::{EmptyState, OutboundLink, Presentation, ToolCard, ViewModel};

/// A surface that can show cards, the empty state, the result count and the
/// active theme.
///
/// Each `render_*` call replaces the previous contents of that area.
pub trait Presenter {
    fn render_cards(&mut self, cards: &[ToolCard]);
    fn render_empty(&mut self, empty: &EmptyState);
    fn render_count(&mut self, count: &str);

    /// Applies the theme mode to the surface and updates the toggle icon.
    fn render_theme(&mut self, mode: ThemeMode);
}

/// Formats the result count line.
///
/// ```
/// use tooldeck::ui::result_count;
///
/// assert_eq!(result_count(3, 12), "3 of 12 tools found");
/// ```
#[must_use]
pub fn result_count(matched: usize, total: usize) -> String {
    format!("{matched} of {total} tools found")
}

/// Builds the view model for a filtered view.
///
/// `total` is the size of the full catalog. `search_term` is only used to
/// compute highlight ranges in card names; pass `""` for none.
#[must_use]
pub fn render(filtered: &[&ToolRecord], total: usize, search_term: &str) -> ViewModel {
    let content = if filtered.is_empty() {
        Presentation::Empty(EmptyState::default())
    } else {
        Presentation::Cards(
            filtered
                .iter()
                .map(|tool| tool_card(tool, search_term))
                .collect(),
        )
    };

    ViewModel {
        content,
        result_count: result_count(filtered.len(), total),
        matched: filtered.len(),
        total,
    }
}

/// Draws a view model onto a presenter.
pub fn present<P: Presenter + ?Sized>(vm: &ViewModel, presenter: &mut P) {
    match &vm.content {
        Presentation::Cards(cards) => presenter.render_cards(cards),
        Presentation::Empty(empty) => presenter.render_empty(empty),
    }
    presenter.render_count(&vm.result_count);
}

fn tool_card(tool: &ToolRecord, search_term: &str) -> ToolCard {
    ToolCard {
        name: tool.name.clone(),
        description: tool.description.clone(),
        category_label: tool.category_label().to_string(),
        pricing_label: tool.pricing_label().to_string(),
        logo: tool.logo.clone(),
        fallback_glyph: tool.fallback_glyph(),
        link: OutboundLink::external(&tool.website),
        highlight_ranges: highlight_ranges(&tool.name, search_term),
    }
}

/// Character ranges of `text` where `term` occurs, ignoring case.
///
/// Returns no ranges when lower-casing changes the character count of `text`
/// since the indices would no longer line up.
fn highlight_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return vec![];
    }

    let lower = text.to_lowercase();
    if lower.chars().count() != text.chars().count() {
        return vec![];
    }

    let term_chars = term.chars().count();
    lower
        .match_indices(&term)
        .map(|(byte_idx, _)| {
            let start = lower[..byte_idx].chars().count();
            (start, start + term_chars)
        })
        .collect()
}
