//! Event handling and state transition logic.
//!
//! [`handle_event`] is the primary subscription: it takes one input event,
//! updates the filter constraints or cursor in [`AppState`], re-runs the filter
//! engine when a constraint changed, and returns the actions that need a
//! capability the state does not own.
//!
//! # Event Types
//!
//! - **Search**: `SearchChanged`, `Char`, `Backspace`
//! - **Constraints**: `CategoryChanged`, `PricingChanged`, `CycleCategory`,
//!   `CyclePricing`, `ClearFilters`
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Outbound**: `VisitTool`, `VisitSelected`, `CloseFocus`
//! - **Theme**: `ToggleTheme`
//!
//! Analytics is not handled here. See [`crate::app::tracking`].
//!
//! # Example
//!
//! ```rust
//! use tooldeck::app::{handle_event, AppState, Event};
//! use tooldeck::ToolRecord;
//!
//! let catalog = vec![
//!     ToolRecord::new("Scribe", "Drafts posts", "writing", "freemium"),
//!     ToolRecord::new("Coder", "Completes code", "development", "paid"),
//! ];
//! let mut state = AppState::new(catalog, Default::default());
//! let (rerender, actions) = handle_event(&mut state, &Event::SearchChanged("cod".into()))?;
//! assert!(rerender);
//! assert!(actions.is_empty());
//! assert_eq!(state.filtered[0].name, "Coder");
//! # Ok::<(), tooldeck::TooldeckError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::tool::{CATEGORIES, PRICING_TIERS};

/// Input events from either presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search box now holds this value.
    SearchChanged(String),
    /// Appends a character to the search box.
    Char(char),
    /// Removes the last character from the search box.
    Backspace,

    /// The category dropdown now holds this key. `None` or `""` means all.
    CategoryChanged(Option<String>),
    /// The pricing dropdown now holds this key. `None` or `""` means all.
    PricingChanged(Option<String>),
    /// Advances the category to the next key, wrapping through "all".
    CycleCategory,
    /// Advances the pricing tier to the next key, wrapping through "all".
    CyclePricing,
    /// Resets search, category and pricing.
    ClearFilters,

    /// Flips between light and dark mode.
    ToggleTheme,

    /// Follows the website link of the card at this index of the filtered view.
    VisitTool(usize),
    /// Follows the website link of the card under the cursor.
    VisitSelected,

    /// Moves the cursor down by one card (wraps to top).
    KeyDown,
    /// Moves the cursor up by one card (wraps to bottom).
    KeyUp,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the view needs to be re-rendered. The filter
/// engine runs at most once per call.
///
/// # Errors
///
/// Currently infallible. The `Result` keeps the signature stable for
/// handlers that need a capability which can fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchChanged(value) => {
            state.set_search_input(value);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            let mut value = state.search_input.clone();
            value.push(*c);
            state.set_search_input(&value);
            tracing::trace!(query = %state.search_input, char = %c, "search query updated");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.search_input.is_empty() {
                return Ok((false, vec![]));
            }
            let mut value = state.search_input.clone();
            value.pop();
            state.set_search_input(&value);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::CategoryChanged(value) => {
            state.filter.set_category(value.as_deref());
            tracing::debug!(category = ?state.filter.category, "category changed");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::PricingChanged(value) => {
            state.filter.set_pricing(value.as_deref());
            tracing::debug!(pricing = ?state.filter.pricing, "pricing changed");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::CycleCategory => {
            let next = next_option(CATEGORIES, state.filter.category.as_deref());
            state.filter.set_category(next);
            tracing::debug!(category = ?state.filter.category, "category cycled");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::CyclePricing => {
            let next = next_option(PRICING_TIERS, state.filter.pricing.as_deref());
            state.filter.set_pricing(next);
            tracing::debug!(pricing = ?state.filter.pricing, "pricing cycled");
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            if state.filter.is_unconstrained() && state.search_input.is_empty() {
                return Ok((false, vec![]));
            }
            tracing::debug!("filters cleared");
            state.search_input.clear();
            state.filter.clear();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ToggleTheme => Ok((true, vec![Action::ToggleTheme])),
        Event::VisitTool(index) => Ok((false, visit(state.filtered.get(*index)))),
        Event::VisitSelected => Ok((false, visit(state.selected_tool()))),
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

fn visit(tool: Option<&crate::domain::ToolRecord>) -> Vec<Action> {
    let Some(tool) = tool else {
        tracing::debug!("no tool to visit");
        return vec![];
    };
    if tool.website.is_empty() {
        tracing::debug!(tool = %tool.name, "tool has no website");
        return vec![];
    }
    tracing::debug!(tool = %tool.name, url = %tool.website, "visiting tool");
    vec![Action::OpenUrl {
        name: tool.name.clone(),
        url: tool.website.clone(),
    }]
}

/// Key following `current` in `table`. The last key wraps to `None` ("all")
/// and `None` advances to the first key. Unknown keys reset to "all".
fn next_option(table: &'static [(&'static str, &'static str)], current: Option<&str>) -> Option<&'static str> {
    match current {
        None => table.first().map(|(key, _)| *key),
        Some(current) => table
            .iter()
            .position(|(key, _)| *key == current)
            .and_then(|i| table.get(i + 1))
            .map(|(key, _)| *key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToolRecord;

    fn state() -> AppState {
        let catalog = vec![
            ToolRecord::new("Scribe", "AI writing assistant", "writing", "freemium")
                .with_website("https://scribe.example"),
            ToolRecord::new("Coder", "Code completion", "development", "paid")
                .with_website("https://coder.example"),
            ToolRecord::new("Agenda", "Plans your day", "productivity", "free"),
        ];
        AppState::new(catalog, Default::default())
    }

    fn names(state: &AppState) -> Vec<&str> {
        state.filtered.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_search_changed_filters() {
        let mut state = state();
        let (rerender, actions) = handle_event(&mut state, &Event::SearchChanged("COD".into())).unwrap();
        assert!(rerender);
        assert!(actions.is_empty());
        assert_eq!(names(&state), vec!["Coder"]);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut state = state();
        for c in "xyz".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert!(state.filtered.is_empty());
        assert_eq!(state.search_input, "xyz");

        for _ in 0..3 {
            handle_event(&mut state, &Event::Backspace).unwrap();
        }
        assert_eq!(state.filtered.len(), 3);

        let (rerender, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!rerender);
    }

    #[test]
    fn test_empty_dropdown_value_means_all() {
        let mut state = state();
        handle_event(&mut state, &Event::PricingChanged(Some("paid".into()))).unwrap();
        assert_eq!(names(&state), vec!["Coder"]);
        handle_event(&mut state, &Event::PricingChanged(Some(String::new()))).unwrap();
        assert_eq!(state.filtered.len(), 3);
        assert_eq!(state.filter.pricing, None);
    }

    #[test]
    fn test_cycle_pricing_wraps_through_all() {
        let mut state = state();
        let mut seen = vec![];
        for _ in 0..4 {
            handle_event(&mut state, &Event::CyclePricing).unwrap();
            seen.push(state.filter.pricing.clone());
        }
        assert_eq!(
            seen,
            vec![
                Some("free".to_string()),
                Some("freemium".to_string()),
                Some("paid".to_string()),
                None
            ]
        );
    }

    #[test]
    fn test_cycle_category_starts_at_first_key() {
        let mut state = state();
        handle_event(&mut state, &Event::CycleCategory).unwrap();
        assert_eq!(state.filter.category.as_deref(), Some("writing"));
        assert_eq!(names(&state), vec!["Scribe"]);
    }

    #[test]
    fn test_clear_filters() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchChanged("zzz".into())).unwrap();
        handle_event(&mut state, &Event::CategoryChanged(Some("image".into()))).unwrap();
        let (rerender, _) = handle_event(&mut state, &Event::ClearFilters).unwrap();
        assert!(rerender);
        assert!(state.filter.is_unconstrained());
        assert!(state.search_input.is_empty());
        assert_eq!(state.filtered.len(), 3);
    }

    #[test]
    fn test_visit_emits_open_url() {
        let mut state = state();
        handle_event(&mut state, &Event::KeyDown).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::VisitSelected).unwrap();
        assert_eq!(
            actions,
            vec![Action::OpenUrl {
                name: "Coder".into(),
                url: "https://coder.example".into()
            }]
        );
    }

    #[test]
    fn test_visit_without_website_or_out_of_range() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::VisitTool(2)).unwrap();
        assert!(actions.is_empty());
        let (_, actions) = handle_event(&mut state, &Event::VisitTool(10)).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn test_toggle_theme_is_delegated() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::ToggleTheme).unwrap();
        assert_eq!(actions, vec![Action::ToggleTheme]);
    }
}
