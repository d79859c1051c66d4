//! Tooldeck: a filterable directory of tools.
//!
//! Tooldeck holds a static catalog of tools and narrows it by free-text
//! search, category and pricing tier, reporting how many tools match. It
//! remembers a light/dark theme preference and can report interactions to an
//! optional analytics sink.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)  │  embedding host    │  ← Entry points
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and analytics subscription        │
//! │  - Theme controller                                 │
//! │  - Controller executing actions                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Analytics     │
//! │ (ui/)         │   │ (storage/)    │   │ (analytics/)  │
//! │ - View model  │   │ - JSON file   │   │ - Sinks       │
//! │ - HTML / ANSI │   │ - In-memory   │   │               │
//! │ - Themes      │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Tool records, catalog loading, filter engine     │
//! │  - Error types                                      │
//! │  - Sandbox paths                                    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Events, state, controller
//! - [`domain`]: Tool records, catalog, filter engine, errors
//! - [`storage`]: Preference persistence
//! - [`analytics`]: Optional interaction reporting
//! - [`ui`]: View model, HTML and terminal presentation, themes
//! - [`infrastructure`]: Sandbox path handling
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/tooldeck.wasm" {
//!         catalog_file "~/tools.json"
//!         dark_theme_file "~/.config/tooldeck/dark.toml"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Examples
//!
//! ```rust
//! use tooldeck::{initialize, Config, Event};
//!
//! let dir = std::env::temp_dir().join("tooldeck-lib-doc");
//! let mut controller = initialize(&Config { data_dir: dir, ..Default::default() });
//!
//! controller.dispatch(&Event::SearchChanged("cod".into()))?;
//! let names: Vec<_> = controller.state().filtered.iter().map(|t| t.name.as_str()).collect();
//! assert_eq!(names, vec!["Coder"]);
//! # Ok::<(), tooldeck::TooldeckError>(())
//! ```

pub mod analytics;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod ui;

pub mod observability;

pub use analytics::{AnalyticsEvent, AnalyticsSink, NoopSink, RecordingSink};
pub use app::{handle_event, Action, AppState, Controller, Event};
pub use domain::{filter_tools, FilterState, Result, ToolRecord, TooldeckError};
pub use storage::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use ui::{HtmlPresenter, Palettes, Presenter, Theme, ThemeMode};

use infrastructure::{default_data_dir, display_path, expand_tilde, resolve_path};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Name of the preference file inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Plugin configuration, usually parsed from the Zellij plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/tooldeck.wasm" {
///     catalog_file "~/tools.json"
///     light_theme_file "~/.config/tooldeck/light.toml"
///     dark_theme_file "~/.config/tooldeck/dark.toml"
///     measurement_id "G-XXXXXXX"
///     hostname "tools.example.com"
///     trace_level "debug"
///     data_dir "~/.local/share/zellij/tooldeck"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog replacing the bundled one.
    pub catalog_file: Option<String>,

    /// TOML palette replacing the bundled light palette.
    pub light_theme_file: Option<String>,

    /// TOML palette replacing the bundled dark palette.
    pub dark_theme_file: Option<String>,

    /// Analytics measurement id. Analytics stays off without one.
    pub measurement_id: Option<String>,

    /// Host the catalog is served from. `localhost` and `127.0.0.1` disable
    /// analytics.
    pub hostname: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    /// Directory for the preference file and trace output.
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            light_theme_file: None,
            dark_theme_file: None,
            measurement_id: None,
            hostname: None,
            trace_level: None,
            data_dir: default_data_dir(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as absent. Paths starting with `~` are
    /// rewritten to the `/host` mount.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tooldeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_file".to_string(), "~/tools.json".to_string());
    /// map.insert("hostname".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_file.as_deref(), Some("/host/tools.json"));
    /// assert_eq!(config.hostname, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let path = |key: &str| text(key).map(|v| expand_tilde(&v));

        Self {
            catalog_file: path("catalog_file"),
            light_theme_file: path("light_theme_file"),
            dark_theme_file: path("dark_theme_file"),
            measurement_id: text("measurement_id"),
            hostname: text("hostname"),
            trace_level: text("trace_level"),
            data_dir: config
                .get("data_dir")
                .and_then(|v| resolve_path(v))
                .unwrap_or_else(default_data_dir),
        }
    }

    /// Path of the JSON preference file.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }
}

/// Controller type built by [`initialize`].
pub type DynController = Controller<Box<dyn PreferenceStore>, Box<dyn AnalyticsSink>>;

/// Builds a ready controller from configuration.
///
/// Nothing here is fatal:
/// - an unreadable `catalog_file` falls back to the bundled catalog
/// - an unreadable palette file falls back to the bundled palette
/// - an unusable data directory falls back to an in-memory preference store
///
/// The stored theme preference is applied before this returns.
#[must_use]
pub fn initialize(config: &Config) -> DynController {
    tracing::debug!("initializing tooldeck");

    let catalog = config.catalog_file.as_ref().map_or_else(
        domain::bundled_catalog,
        |file| {
            domain::load_catalog_file(file).unwrap_or_else(|e| {
                tracing::warn!(catalog_file = %file, error = %e, "failed to load catalog, using bundled");
                domain::bundled_catalog()
            })
        },
    );

    let palettes = Palettes::load(
        config.light_theme_file.as_deref(),
        config.dark_theme_file.as_deref(),
    );

    let preferences_path = config.preferences_path();
    let store: Box<dyn PreferenceStore> = match JsonPreferenceStore::new(&preferences_path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(
                path = %display_path(&preferences_path),
                error = %e,
                "preference file unavailable, theme will not persist"
            );
            Box::new(MemoryPreferenceStore::default())
        }
    };

    let analytics = analytics::sink_from_config(config);

    tracing::info!(tools = catalog.len(), "catalog ready");
    Controller::with_analytics(AppState::new(catalog, palettes), store, analytics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_zellij_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.catalog_file, None);
        assert_eq!(config.data_dir, default_data_dir());
        assert_eq!(config.preferences_path(), default_data_dir().join("preferences.json"));
    }

    #[test]
    fn test_from_zellij_reads_every_key() {
        let map: BTreeMap<String, String> = [
            ("light_theme_file", "/t/light.toml"),
            ("dark_theme_file", "~/dark.toml"),
            ("measurement_id", "G-123"),
            ("hostname", "tools.example.com"),
            ("trace_level", "debug"),
            ("data_dir", "/tmp/tooldeck"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_zellij(&map);
        assert_eq!(config.light_theme_file.as_deref(), Some("/t/light.toml"));
        assert_eq!(config.dark_theme_file.as_deref(), Some("/host/dark.toml"));
        assert_eq!(config.measurement_id.as_deref(), Some("G-123"));
        assert_eq!(config.hostname.as_deref(), Some("tools.example.com"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/tooldeck"));
    }

    #[test]
    fn test_initialize_falls_back_to_bundled_catalog() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            catalog_file: Some(dir.path().join("missing.json").display().to_string()),
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let controller = initialize(&config);
        assert_eq!(controller.state().catalog, domain::bundled_catalog());
    }
}
