//! View model types.
//!
//! [`ViewModel`] is the presentation-agnostic output of the renderer: either
//! a list of [`ToolCard`]s or an [`EmptyState`], plus the result count text.
//! [`TerminalView`] wraps it with the chrome the terminal surface draws
//! around the cards (header, search box, filter bar, footer, cursor).
//!
//! View models carry no behavior, only display-ready data.

use crate::ui::theme::ThemeIcon;

/// Browsing context an outbound link opens in.
pub const NEW_BROWSING_CONTEXT: &str = "_blank";

/// Link relation that withholds opener and referrer from the target site.
pub const NO_OPENER_NO_REFERRER: &str = "noopener noreferrer";

/// Everything a presenter needs to draw the result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub content: Presentation,

    /// `"<matched> of <total> tools found"`.
    pub result_count: String,

    pub matched: usize,
    pub total: usize,
}

impl ViewModel {
    /// Cards to draw, empty when the empty state is shown.
    #[must_use]
    pub fn cards(&self) -> &[ToolCard] {
        match &self.content {
            Presentation::Cards(cards) => cards,
            Presentation::Empty(_) => &[],
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.content, Presentation::Empty(_))
    }
}

/// The result area: cards, or the placeholder when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    Cards(Vec<ToolCard>),
    Empty(EmptyState),
}

/// Display data for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCard {
    pub name: String,
    pub description: String,
    pub category_label: String,
    pub pricing_label: String,

    /// Image reference for the logo.
    pub logo: String,

    /// Shown instead of the logo when the image fails to load.
    pub fallback_glyph: String,

    pub link: OutboundLink,

    /// Character ranges of the name matching the search term, `(start, end)`
    /// with an exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// An outbound link to a tool's website.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundLink {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl OutboundLink {
    /// A link opening `href` in a new browsing context without opener or
    /// referrer.
    #[must_use]
    pub fn external(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            target: NEW_BROWSING_CONTEXT,
            rel: NO_OPENER_NO_REFERRER,
        }
    }
}

/// Placeholder shown when no tool matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Icon name (`search`).
    pub icon: String,
    pub heading: String,
    pub hint: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            icon: "search".to_string(),
            heading: "No tools found".to_string(),
            hint: "Try adjusting your search or filters".to_string(),
        }
    }
}

/// Terminal screen model.
#[derive(Debug, Clone)]
pub struct TerminalView {
    /// Result area, already windowed to the rows that fit.
    pub view: ViewModel,

    /// Cursor position within `view.cards()`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub filter_bar: FilterBarInfo,
    pub footer: FooterInfo,
}

/// Title row: name, count and theme toggle glyph.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    pub result_count: String,
    pub theme_icon: ThemeIcon,
}

/// Search input box.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Text as typed (not lower-cased).
    pub query: String,
}

/// Active dropdown values.
#[derive(Debug, Clone)]
pub struct FilterBarInfo {
    /// Category label, or `"All Categories"`.
    pub category: String,
    /// Pricing label, or `"All Pricing"`.
    pub pricing: String,
}

/// Key hints.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}
