//! Tool record model and display-name lookups.
//!
//! A [`ToolRecord`] is one entry of the catalog. Records are immutable for the
//! lifetime of a session. Category and pricing are stored as raw string keys
//! and translated to labels only at display time.

use serde::{Deserialize, Serialize};

/// Category keys and their display labels, in dropdown order.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("writing", "Writing"),
    ("development", "Development"),
    ("design", "Design"),
    ("video", "Video"),
    ("audio", "Audio"),
    ("productivity", "Productivity"),
    ("marketing", "Marketing"),
    ("research", "Research"),
    ("chatbots", "Chatbots"),
    ("image", "Image"),
    ("automation", "Automation"),
    ("analytics", "Analytics"),
];

/// Pricing keys and their display labels, in dropdown order.
pub const PRICING_TIERS: &[(&str, &str)] = &[
    ("free", "Free"),
    ("freemium", "Freemium"),
    ("paid", "Paid"),
];

/// One entry in the tool catalog.
///
/// Every field defaults to an empty string when absent from the source
/// document, so a partially filled entry still loads. An empty field never
/// matches a non-empty constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolRecord {
    pub name: String,
    pub description: String,
    pub category: String,
    pub pricing: String,
    pub website: String,
    pub logo: String,
}

impl ToolRecord {
    /// Creates a record with the fields the filter looks at.
    ///
    /// `website` and `logo` start empty; set them with the builder methods.
    ///
    /// # Examples
    ///
    /// ```
    /// use tooldeck::ToolRecord;
    ///
    /// let tool = ToolRecord::new("Scribe", "Drafts blog posts", "writing", "free")
    ///     .with_website("https://scribe.example");
    /// assert_eq!(tool.category_label(), "Writing");
    /// ```
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        pricing: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            pricing: pricing.into(),
            website: String::new(),
            logo: String::new(),
        }
    }

    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = logo.into();
        self
    }

    /// Human-readable category label, falling back to the raw key.
    #[must_use]
    pub fn category_label(&self) -> &str {
        category_display_name(&self.category)
    }

    /// Human-readable pricing label, falling back to the raw key.
    #[must_use]
    pub fn pricing_label(&self) -> &str {
        pricing_display_name(&self.pricing)
    }

    /// Glyph shown in place of the logo when the image cannot be loaded.
    ///
    /// This is the first character of the name, or an empty string for an
    /// unnamed record.
    #[must_use]
    pub fn fallback_glyph(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Looks up the display label for a category key.
///
/// Unknown keys are returned unchanged.
///
/// ```
/// use tooldeck::domain::tool::category_display_name;
///
/// assert_eq!(category_display_name("chatbots"), "Chatbots");
/// assert_eq!(category_display_name("gaming"), "gaming");
/// ```
#[must_use]
pub fn category_display_name(key: &str) -> &str {
    lookup(CATEGORIES, key)
}

/// Looks up the display label for a pricing key.
///
/// Unknown keys are returned unchanged.
#[must_use]
pub fn pricing_display_name(key: &str) -> &str {
    lookup(PRICING_TIERS, key)
}

fn lookup<'a>(table: &'static [(&'static str, &'static str)], key: &'a str) -> &'a str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_map_to_labels() {
        assert_eq!(category_display_name("development"), "Development");
        assert_eq!(pricing_display_name("freemium"), "Freemium");
    }

    #[test]
    fn test_unknown_keys_fall_back_to_raw_key() {
        assert_eq!(category_display_name("robotics"), "robotics");
        assert_eq!(pricing_display_name("enterprise"), "enterprise");
        assert_eq!(pricing_display_name(""), "");
    }

    #[test]
    fn test_fallback_glyph_is_first_character() {
        let tool = ToolRecord::new("Écrivain", "", "writing", "free");
        assert_eq!(tool.fallback_glyph(), "É");
        assert_eq!(ToolRecord::default().fallback_glyph(), "");
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let tool: ToolRecord = serde_json::from_str(r#"{"name":"Solo"}"#).unwrap();
        assert_eq!(tool.name, "Solo");
        assert!(tool.category.is_empty());
        assert!(tool.website.is_empty());
    }
}
