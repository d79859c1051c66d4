//! Light/dark theme selection with a persisted preference.
//!
//! The preference lives under the [`THEME_KEY`] key of a
//! [`PreferenceStore`] as the literal string `"light"` or `"dark"`. Anything
//! else, including a missing value, selects light mode.

use crate::storage::PreferenceStore;
use crate::ui::theme::{ThemeIcon, ThemeMode};

/// Preference key holding the theme mode.
pub const THEME_KEY: &str = "theme";

/// Owns the preference store and the active theme mode.
///
/// Store failures are logged and otherwise ignored: the mode still flips for
/// the current session even when it cannot be persisted.
///
/// # Examples
///
/// ```
/// use tooldeck::app::ThemeController;
/// use tooldeck::storage::{MemoryPreferenceStore, PreferenceStore};
/// use tooldeck::ui::{ThemeIcon, ThemeMode};
///
/// let mut themes = ThemeController::new(MemoryPreferenceStore::default());
/// assert_eq!(themes.initialize(), ThemeMode::Light);
/// assert_eq!(themes.toggle(), ThemeMode::Dark);
/// assert_eq!(themes.indicator(), ThemeIcon::Sun);
/// assert_eq!(themes.store().get("theme")?.as_deref(), Some("dark"));
/// # Ok::<(), tooldeck::TooldeckError>(())
/// ```
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Wraps a store. The mode is light until [`initialize`](Self::initialize) runs.
    pub fn new(store: S) -> Self {
        Self {
            store,
            mode: ThemeMode::Light,
        }
    }

    /// Reads the stored preference and applies it.
    ///
    /// Nothing is written: a missing preference stays missing until the first
    /// toggle.
    pub fn initialize(&mut self) -> ThemeMode {
        let stored = match self.store.get(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme preference");
                None
            }
        };
        self.mode = ThemeMode::from_stored(stored.as_deref());
        tracing::debug!(stored = ?stored, mode = %self.mode, "theme initialized");
        self.mode
    }

    /// Flips the mode and persists it.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.mode.as_str()) {
            tracing::warn!(error = %e, mode = %self.mode, "failed to persist theme preference");
        }
        tracing::debug!(mode = %self.mode, "theme toggled");
        self.mode
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Icon of the toggle control: moon in light mode, sun in dark mode.
    #[must_use]
    pub const fn indicator(&self) -> ThemeIcon {
        self.mode.indicator()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
