//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the host (the Zellij plugin in `main.rs`, or an
//! embedding page) and the domain/storage/ui layers.
//!
//! # Architecture
//!
//! ```text
//! Input → Event → handle_event → AppState → Actions → Controller / host
//!                      └──────→ track_event → AnalyticsSink
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`controller`]: Runs both subscriptions and executes internal actions
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: Central application state container and view model computation
//! - [`theme_controller`]: Persisted light/dark mode
//! - [`tracking`]: Analytics subscription
//!
//! # Example
//!
//! ```rust
//! use tooldeck::app::{AppState, Controller, Event};
//! use tooldeck::storage::MemoryPreferenceStore;
//!
//! let state = AppState::new(tooldeck::domain::bundled_catalog(), Default::default());
//! let mut controller = Controller::new(state, MemoryPreferenceStore::default());
//! controller.dispatch(&Event::SearchChanged("xyz".into()))?;
//! assert!(controller.view_model().is_empty());
//! # Ok::<(), tooldeck::TooldeckError>(())
//! ```

pub mod actions;
pub mod controller;
pub mod handler;
pub mod state;
pub mod theme_controller;
pub mod tracking;

pub use actions::Action;
pub use controller::Controller;
pub use handler::{handle_event, Event};
pub use state::AppState;
pub use theme_controller::{ThemeController, THEME_KEY};
pub use tracking::track_event;
