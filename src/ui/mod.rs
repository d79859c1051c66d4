//! Presentation layer.
//!
//! ```text
//! AppState ─► render ─► ViewModel ─┬─► HtmlPresenter  (page markup)
//!                                  └─► TerminalView ─► components ─► ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`renderer`]: Pure filtered-view → view model function and the [`Presenter`] trait
//! - [`viewmodel`]: View model types
//! - [`html`]: HTML presenter
//! - [`terminal`]: Terminal frame renderer used by the plugin
//! - [`components`]: Terminal component renderers
//! - [`helpers`]: Canvas buffer and text utilities
//! - [`theme`]: Theme mode, palettes and ANSI colors

pub mod components;
pub mod helpers;
pub mod html;
pub mod renderer;
pub mod terminal;
pub mod theme;
pub mod viewmodel;

pub use html::HtmlPresenter;
pub use renderer::{present, render, result_count, Presenter};
pub use terminal::render_terminal;
pub use theme::{Palettes, Theme, ThemeIcon, ThemeMode};
pub use viewmodel::{
    EmptyState, FilterBarInfo, FooterInfo, HeaderInfo, OutboundLink, Presentation, SearchBarInfo,
    TerminalView, ToolCard, ViewModel,
};
