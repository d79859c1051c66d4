//! Preference storage abstraction.
//!
//! The [`PreferenceStore`] trait is the key-value persistence capability the
//! theme controller is written against. It stands in for browser local
//! storage: string keys, string values, absent keys are not an error.

use crate::domain::error::Result;

/// Abstraction over persistent key-value preference backends.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](crate::storage::JsonPreferenceStore): JSON file with atomic writes
/// - [`MemoryPreferenceStore`](crate::storage::MemoryPreferenceStore): process-local map
///
/// # Examples
///
/// ```
/// use tooldeck::storage::{MemoryPreferenceStore, PreferenceStore};
///
/// let mut store = MemoryPreferenceStore::default();
/// assert_eq!(store.get("theme")?, None);
/// store.set("theme", "dark")?;
/// assert_eq!(store.get("theme")?.as_deref(), Some("dark"));
/// # Ok::<(), tooldeck::TooldeckError>(())
/// ```
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` if it was never set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
