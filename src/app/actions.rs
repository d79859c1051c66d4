//! Actions representing side effects.
//!
//! The event handler only mutates [`AppState`](crate::app::AppState);
//! anything touching the outside world is returned as an [`Action`]. The
//! [`Controller`](crate::app::Controller) executes the actions it owns the
//! capability for (theme persistence) and hands the rest to the host.
//! Analytics does not go through actions; see [`crate::app::tracking`].

/// Commands representing side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Flip the theme, persist the new value and update the indicator.
    ToggleTheme,

    /// Open a tool's website in a new browsing context.
    OpenUrl {
        /// Display name of the tool, for logging.
        name: String,
        url: String,
    },

    /// Hide the plugin pane.
    CloseFocus,
}
