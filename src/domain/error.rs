//! Error types for tooldeck.
//!
//! All fallible operations in the crate return [`TooldeckError`] through the
//! [`Result`] alias. Filtering, rendering and analytics never fail; only
//! catalog loading, theme palette loading and preference storage do.

use thiserror::Error;

/// The main error type for tooldeck operations.
#[derive(Debug, Error)]
pub enum TooldeckError {
    /// Reading or writing the preference store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog source could not be parsed.
    ///
    /// Individual records with missing fields are not an error; only a
    /// document that is not a JSON array of objects is.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// A color palette could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for tooldeck operations.
pub type Result<T> = std::result::Result<T, TooldeckError>;
