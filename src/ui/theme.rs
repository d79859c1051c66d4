//! Theme mode, color palettes and ANSI escape sequence generation.
//!
//! [`ThemeMode`] is the persisted two-valued preference. Each mode is paired
//! with a [`Theme`] palette, loaded from a bundled TOML file or from a custom
//! file named in the configuration.
//!
//! # TOML Format
//!
//! ```toml
//! name = "dark"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! category_fg = "#cba6f7"
//! pricing_fg = "#a6e3a1"
//! link_fg = "#74c7ec"
//! ```

use crate::domain::error::{Result, TooldeckError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Two-valued display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Value stored in the preference store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything other than `"dark"` is light.
    ///
    /// ```
    /// use tooldeck::ui::ThemeMode;
    ///
    /// assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
    /// assert_eq!(ThemeMode::from_stored(Some("sepia")), ThemeMode::Light);
    /// assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
    /// ```
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle control.
    ///
    /// The icon names the mode a click switches to: a moon while light, a sun
    /// while dark.
    #[must_use]
    pub const fn indicator(self) -> ThemeIcon {
        match self {
            Self::Light => ThemeIcon::Moon,
            Self::Dark => ThemeIcon::Sun,
        }
    }

    /// Class applied to the document body, if any.
    #[must_use]
    pub const fn body_class(self) -> Option<&'static str> {
        match self {
            Self::Light => None,
            Self::Dark => Some("dark"),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyph on the theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    /// Icon font class used by the HTML surface.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Moon => "fas fa-moon",
            Self::Sun => "fas fa-sun",
        }
    }

    /// Character used by the terminal surface.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Moon => '☾',
            Self::Sun => '☀',
        }
    }
}

/// Color palette for terminal rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors for each UI element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub category_fg: String,
    pub pricing_fg: String,
    pub link_fg: String,
}

impl Theme {
    /// Loads the bundled palette for a mode.
    ///
    /// # Panics
    ///
    /// Panics if the bundled TOML fails to parse (should never occur).
    #[must_use]
    pub fn bundled(mode: ThemeMode) -> Self {
        let toml_str = match mode {
            ThemeMode::Light => include_str!("../../themes/light.toml"),
            ThemeMode::Dark => include_str!("../../themes/dark.toml"),
        };
        toml::from_str(toml_str).expect("Bundled theme palettes should always parse")
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TooldeckError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TooldeckError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| TooldeckError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

/// The pair of palettes, one per mode.
#[derive(Debug, Clone)]
pub struct Palettes {
    pub light: Theme,
    pub dark: Theme,
}

impl Palettes {
    /// Loads palettes, preferring custom files and falling back to the bundled
    /// palette when a file is missing or invalid.
    #[must_use]
    pub fn load(light_file: Option<&str>, dark_file: Option<&str>) -> Self {
        Self {
            light: Self::load_one(ThemeMode::Light, light_file),
            dark: Self::load_one(ThemeMode::Dark, dark_file),
        }
    }

    fn load_one(mode: ThemeMode, file: Option<&str>) -> Theme {
        file.map_or_else(
            || Theme::bundled(mode),
            |path| {
                Theme::from_file(path).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %path, error = %e, mode = %mode, "failed to load theme from file, using bundled");
                    Theme::bundled(mode)
                })
            },
        )
    }

    #[must_use]
    pub const fn for_mode(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            light: Theme::bundled(ThemeMode::Light),
            dark: Theme::bundled(ThemeMode::Dark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_points_at_other_mode() {
        assert_eq!(ThemeMode::Light.indicator(), ThemeIcon::Moon);
        assert_eq!(ThemeMode::Dark.indicator(), ThemeIcon::Sun);
        assert_eq!(ThemeIcon::Sun.css_class(), "fas fa-sun");
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_bundled_palettes_parse() {
        let palettes = Palettes::default();
        assert_eq!(palettes.for_mode(ThemeMode::Light).name, "light");
        assert_eq!(palettes.for_mode(ThemeMode::Dark).name, "dark");
    }

    #[test]
    fn test_invalid_theme_file_falls_back_to_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = ").unwrap();

        let palettes = Palettes::load(path.to_str(), None);
        assert_eq!(palettes.light.name, "light");
    }

    #[test]
    fn test_hex_to_ansi() {
        assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
        assert_eq!(Theme::bg("bogus"), "\u{1b}[48;2;255;255;255m");
    }
}
