//! Catalog filtering.
//!
//! [`filter_tools`] is the whole filter engine: a pure function from the
//! catalog and a [`FilterState`] to the ordered subset of matching records.
//! The three constraint axes compose with logical AND and each one is a
//! wildcard when unset.

use super::tool::ToolRecord;

/// The active constraints on the catalog.
///
/// `search_term` is stored lower-cased. An empty term, or a `None` category or
/// pricing key, places no constraint on that axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub category: Option<String>,
    pub pricing: Option<String>,
}

impl FilterState {
    /// Sets the search term, lower-casing it.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_lowercase();
    }

    /// Sets the category constraint. An empty value clears it.
    pub fn set_category(&mut self, category: Option<&str>) {
        self.category = normalize(category);
    }

    /// Sets the pricing constraint. An empty value clears it.
    pub fn set_pricing(&mut self, pricing: Option<&str>) {
        self.pricing = normalize(pricing);
    }

    /// Returns `true` when no axis is constrained.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty() && self.category.is_none() && self.pricing.is_none()
    }

    /// Clears all three axes.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` if `tool` satisfies every active constraint.
    #[must_use]
    pub fn matches(&self, tool: &ToolRecord) -> bool {
        self.matches_search(tool) && self.matches_category(tool) && self.matches_pricing(tool)
    }

    fn matches_search(&self, tool: &ToolRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        // The term is lowered on entry, but a caller may have assigned the
        // field directly.
        let term = self.search_term.to_lowercase();
        [&tool.name, &tool.description, &tool.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_category(&self, tool: &ToolRecord) -> bool {
        self.category.as_deref().map_or(true, |c| tool.category == c)
    }

    fn matches_pricing(&self, tool: &ToolRecord) -> bool {
        self.pricing.as_deref().map_or(true, |p| tool.pricing == p)
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

/// Returns the records of `catalog` matching `state`, in catalog order.
///
/// Never fails and never reorders.
///
/// # Examples
///
/// ```
/// use tooldeck::{filter_tools, FilterState, ToolRecord};
///
/// let catalog = vec![
///     ToolRecord::new("Scribe", "Writes copy", "writing", "free"),
///     ToolRecord::new("Coder", "Writes code", "development", "paid"),
/// ];
///
/// let mut state = FilterState::default();
/// state.set_search_term("cod");
/// let names: Vec<_> = filter_tools(&catalog, &state).iter().map(|t| t.name.as_str()).collect();
/// assert_eq!(names, ["Coder"]);
/// ```
#[must_use]
pub fn filter_tools<'a>(catalog: &'a [ToolRecord], state: &FilterState) -> Vec<&'a ToolRecord> {
    let _span = tracing::debug_span!("filter_tools",
        total = catalog.len(),
        term_len = state.search_term.len(),
        category = ?state.category,
        pricing = ?state.pricing
    ).entered();

    let filtered: Vec<&ToolRecord> = catalog.iter().filter(|tool| state.matches(tool)).collect();

    tracing::debug!(matched = filtered.len(), "catalog filtered");
    filtered
}
