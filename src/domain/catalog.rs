//! Catalog loading.
//!
//! The catalog is an ordered JSON array of tool objects. A bundled catalog is
//! compiled into the binary; a user-supplied file can replace it. Entries that
//! are not JSON objects, or whose fields have the wrong type, are skipped with
//! a warning rather than failing the whole load.

use super::error::{Result, TooldeckError};
use super::tool::ToolRecord;
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../catalog/tools.json");

/// Parses a catalog from a JSON document.
///
/// # Errors
///
/// Returns [`TooldeckError::Catalog`] if the document is not a JSON array.
pub fn parse_catalog(json: &str) -> Result<Vec<ToolRecord>> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json)
        .map_err(|e| TooldeckError::Catalog(format!("expected a JSON array of tools: {e}")))?;

    let total = entries.len();
    let tools: Vec<ToolRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<ToolRecord>(entry) {
            Ok(tool) => Some(tool),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed catalog entry");
                None
            }
        })
        .collect();

    tracing::debug!(total, loaded = tools.len(), "catalog parsed");
    Ok(tools)
}

/// Loads a catalog from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Vec<ToolRecord>> {
    let path = path.as_ref();
    tracing::debug!(path = ?path, "loading catalog file");
    let contents = std::fs::read_to_string(path)?;
    parse_catalog(&contents)
}

/// Returns the catalog compiled into the crate.
///
/// # Panics
///
/// Panics if the bundled catalog fails to parse (should never occur).
#[must_use]
pub fn bundled_catalog() -> Vec<ToolRecord> {
    parse_catalog(BUNDLED_CATALOG).expect("Bundled catalog should always parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_is_not_empty() {
        let catalog = bundled_catalog();
        assert!(!catalog.is_empty());
        assert!(catalog.iter().all(|t| !t.name.is_empty()));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let json = r#"[
            {"name": "Good", "category": "writing", "pricing": "free"},
            "not an object",
            {"name": "Typed", "category": 42},
            {"name": "Partial"}
        ]"#;
        let catalog = parse_catalog(json).unwrap();
        let names: Vec<_> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Good", "Partial"]);
    }

    #[test]
    fn test_non_array_document_is_an_error() {
        let err = parse_catalog(r#"{"tools": []}"#).unwrap_err();
        assert!(matches!(err, TooldeckError::Catalog(_)));
    }

    #[test]
    fn test_load_catalog_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tools.json");
        std::fs::write(&path, r#"[{"name": "FromDisk", "pricing": "paid"}]"#).unwrap();

        let catalog = load_catalog_file(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].pricing_label(), "Paid");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog_file("/nonexistent/tooldeck/tools.json").unwrap_err();
        assert!(matches!(err, TooldeckError::Io(_)));
    }
}
