//! Filesystem locations inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, so user-facing paths from
//! the plugin configuration are translated before they are opened.

pub mod paths;

pub use paths::{default_data_dir, display_path, expand_tilde, resolve_path};
