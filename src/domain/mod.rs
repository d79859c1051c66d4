//! Domain layer for tooldeck.
//!
//! Core types and pure logic, independent of Zellij, HTML or any storage
//! backend.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`tool`]: Tool record model and display-name lookups
//! - [`catalog`]: Loading the ordered catalog from JSON
//! - [`filter`]: Filter state and the filter engine
//!
//! # Examples
//!
//! ```
//! use tooldeck::domain::{filter_tools, FilterState, ToolRecord};
//!
//! let catalog = vec![ToolRecord::new("Scribe", "Writes copy", "writing", "free")];
//! let mut state = FilterState::default();
//! state.set_pricing(Some("free"));
//! assert_eq!(filter_tools(&catalog, &state).len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod tool;

pub use catalog::{bundled_catalog, load_catalog_file, parse_catalog};
pub use error::{Result, TooldeckError};
pub use filter::{filter_tools, FilterState};
pub use tool::ToolRecord;
