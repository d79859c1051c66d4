//! Path helpers for the `/host` sandbox mount.

use std::path::{Path, PathBuf};

const HOST_ROOT: &str = "/host";

/// Default directory for the preference file and trace output.
///
/// Resolves to `~/.local/share/zellij/tooldeck` on the host when Zellij was
/// started from the home directory.
///
/// # Examples
///
/// ```
/// use tooldeck::infrastructure::default_data_dir;
///
/// assert_eq!(default_data_dir().to_str(), Some("/host/.local/share/zellij/tooldeck"));
/// ```
#[must_use]
pub fn default_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/tooldeck")
}

/// Rewrites a leading `~` to the sandbox mount point.
///
/// # Examples
///
/// ```
/// use tooldeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/catalog.json"), "/host/catalog.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/tools.json"), "/etc/tools.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        HOST_ROOT.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else {
        path.to_string()
    }
}

/// Trims and tilde-expands a configured path. Blank values yield `None`.
#[must_use]
pub fn resolve_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(expand_tilde(trimmed)))
}

/// Path as the user would write it on the host, for log messages.
#[must_use]
pub fn display_path(path: &Path) -> String {
    let shown = path.to_string_lossy();
    match shown.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => shown.into_owned(),
    }
}
