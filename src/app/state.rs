//! Application state and view model computation.
//!
//! [`AppState`] is the single owner of everything that changes while the
//! page is open: the filter constraints, the filtered view derived from them,
//! the card cursor and the active theme mode. The catalog itself never
//! changes after construction.
//!
//! # Example
//!
//! ```rust
//! use tooldeck::{AppState, ToolRecord};
//! use tooldeck::ui::Palettes;
//!
//! let catalog = vec![ToolRecord::new("Scribe", "Writes copy", "writing", "free")];
//! let mut state = AppState::new(catalog, Palettes::default());
//! state.filter.set_search_term("scr");
//! state.apply_filters();
//! assert_eq!(state.result_count(), "1 of 1 tools found");
//! ```

use crate::domain::tool::{category_display_name, pricing_display_name};
use crate::domain::{filter_tools, FilterState, ToolRecord};
use crate::ui::components::CHROME_ROWS;
use crate::ui::renderer;
use crate::ui::theme::{Palettes, Theme, ThemeMode};
use crate::ui::viewmodel::{
    FilterBarInfo, FooterInfo, HeaderInfo, Presentation, SearchBarInfo, TerminalView, ViewModel,
};

/// Title shown in the terminal header.
pub const TITLE: &str = "Tooldeck";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The full catalog, in source order.
    pub catalog: Vec<ToolRecord>,

    /// Records matching `filter`, in catalog order.
    ///
    /// Recomputed in full by [`apply_filters`](Self::apply_filters).
    pub filtered: Vec<ToolRecord>,

    pub filter: FilterState,

    /// Search text as typed. `filter.search_term` holds the lower-cased copy.
    pub search_input: String,

    /// Cursor within `filtered`, clamped by `apply_filters`.
    pub selected_index: usize,

    pub theme_mode: ThemeMode,

    pub palettes: Palettes,
}

impl AppState {
    /// Creates state over a catalog with no constraints applied.
    ///
    /// The filtered view starts out as the whole catalog.
    #[must_use]
    pub fn new(catalog: Vec<ToolRecord>, palettes: Palettes) -> Self {
        let filtered = catalog.clone();
        Self {
            catalog,
            filtered,
            filter: FilterState::default(),
            search_input: String::new(),
            selected_index: 0,
            theme_mode: ThemeMode::default(),
            palettes,
        }
    }

    /// Replaces the search text and updates the lower-cased term.
    pub fn set_search_input(&mut self, value: &str) {
        self.search_input = value.to_string();
        self.filter.set_search_term(value);
    }

    /// Recomputes the filtered view from the catalog and clamps the cursor.
    pub fn apply_filters(&mut self) {
        self.filtered = filter_tools(&self.catalog, &self.filter)
            .into_iter()
            .cloned()
            .collect();

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_tool(&self) -> Option<&ToolRecord> {
        self.filtered.get(self.selected_index)
    }

    /// `"<matched> of <total> tools found"` for the current view.
    #[must_use]
    pub fn result_count(&self) -> String {
        renderer::result_count(self.filtered.len(), self.catalog.len())
    }

    /// Palette for the active theme mode.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        self.palettes.for_mode(self.theme_mode)
    }

    /// View model of the whole filtered view.
    #[must_use]
    pub fn view_model(&self) -> ViewModel {
        let filtered: Vec<&ToolRecord> = self.filtered.iter().collect();
        renderer::render(&filtered, self.catalog.len(), &self.filter.search_term)
    }

    /// Terminal screen model for a `rows` × `cols` terminal.
    ///
    /// Only the cards that fit are included. The window is centered on the
    /// cursor and shifted to stay full near either end of the list.
    #[must_use]
    pub fn compute_terminal_view(&self, rows: usize, cols: usize) -> TerminalView {
        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered.len());
        if visible_end - visible_start < available_rows && self.filtered.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let window: Vec<&ToolRecord> = self.filtered[visible_start..visible_end].iter().collect();
        let mut view = renderer::render(&window, self.catalog.len(), &self.filter.search_term);
        if let Presentation::Cards(_) = view.content {
            // The count describes the whole filtered view, not the window.
            view.matched = self.filtered.len();
            view.result_count = self.result_count();
        }

        tracing::trace!(
            rows,
            cols,
            visible_start,
            visible_end,
            "terminal view computed"
        );

        TerminalView {
            view,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: HeaderInfo {
                title: TITLE.to_string(),
                result_count: self.result_count(),
                theme_icon: self.theme_mode.indicator(),
            },
            search_bar: SearchBarInfo {
                query: self.search_input.clone(),
            },
            filter_bar: FilterBarInfo {
                category: self
                    .filter
                    .category
                    .as_deref()
                    .map_or_else(|| "All Categories".to_string(), |c| category_display_name(c).to_string()),
                pricing: self
                    .filter
                    .pricing
                    .as_deref()
                    .map_or_else(|| "All Pricing".to_string(), |p| pricing_display_name(p).to_string()),
            },
            footer: FooterInfo {
                keybindings: "Type to search  Tab: category  Ctrl+f: pricing  ↑/↓: move  Enter: visit  Ctrl+t: theme  Esc: clear/quit"
                    .to_string(),
            },
        }
    }
}
