//! Data models for the navigation bar
//!
//! Defines the two record types held by the document store: `Link` and
//! `Preference`. Both are flat key-value records so they serialize to the
//! same JSON shape the admin panel and render path exchange.

use serde::{Deserialize, Serialize};

/// A navigable destination shown in the bar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    /// Caller-supplied identifier (uniqueness is not enforced)
    pub id: String,
    /// Display name
    pub name: String,
    /// Destination URL
    pub url: String,
}

impl Link {
    /// Create a new link
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A single configurable setting for the bar's appearance or behavior
///
/// Only `value` is mutated after the record is seeded; the remaining
/// fields describe the setting to the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preference {
    /// Lookup key, expected unique within the collection (not enforced)
    pub key: String,
    /// Display name
    pub name: String,
    /// Current value
    #[serde(default)]
    pub value: String,
    /// Placeholder text shown in the admin form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Help text shown in the admin form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Input widget hint (e.g. "textarea")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Preference {
    /// Create a new preference with an empty value
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            value: String::new(),
            placeholder: None,
            description: None,
            kind: None,
        }
    }

    /// Set the placeholder text
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the help text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the input widget hint
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// The fixed default preference set seeded into an empty collection
    ///
    /// Seeding is a one-time bootstrap: an existing deployment whose
    /// collection is already non-empty never receives new entries from
    /// this list.
    pub fn defaults() -> Vec<Preference> {
        vec![
            Preference::new("customCSS", "Custom CSS")
                .with_placeholder("body {backgroud: magenta;}")
                .with_kind("textarea")
                .with_description("Include any CSS to be inserted to the navbar."),
            Preference::new("cseId", "Google CSE ID")
                .with_placeholder("012345678901234567890:abcdefghijk")
                .with_description(
                    "Display a Google Custom Search field in the navbar by providing a CSE ID.",
                ),
            Preference::new("csePlaceholder", "Search Placeholder")
                .with_placeholder("Search")
                .with_description("Placeholder text displayed in the search field by default."),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_new() {
        let link = Link::new("1", "Home", "https://example.com/");
        assert_eq!(link.id, "1");
        assert_eq!(link.name, "Home");
        assert_eq!(link.url, "https://example.com/");
    }

    #[test]
    fn test_preference_new() {
        let pref = Preference::new("cseId", "Google CSE ID");
        assert_eq!(pref.key, "cseId");
        assert_eq!(pref.name, "Google CSE ID");
        assert!(pref.value.is_empty());
        assert!(pref.placeholder.is_none());
        assert!(pref.description.is_none());
        assert!(pref.kind.is_none());
    }

    #[test]
    fn test_preference_builders() {
        let pref = Preference::new("customCSS", "Custom CSS")
            .with_placeholder("body {}")
            .with_description("Extra CSS")
            .with_kind("textarea");
        assert_eq!(pref.placeholder.as_deref(), Some("body {}"));
        assert_eq!(pref.description.as_deref(), Some("Extra CSS"));
        assert_eq!(pref.kind.as_deref(), Some("textarea"));
    }

    #[test]
    fn test_defaults() {
        let defaults = Preference::defaults();
        assert_eq!(defaults.len(), 3);

        let keys: Vec<&str> = defaults.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["customCSS", "cseId", "csePlaceholder"]);

        // Every default starts with an empty value
        assert!(defaults.iter().all(|p| p.value.is_empty()));
        assert_eq!(defaults[0].kind.as_deref(), Some("textarea"));
    }

    #[test]
    fn test_link_serialization() {
        let link = Link::new("1", "Docs", "https://a.com/docs");
        let json = serde_json::to_string(&link).unwrap();
        let deserialized: Link = serde_json::from_str(&json).unwrap();
        assert_eq!(link, deserialized);
    }

    #[test]
    fn test_preference_kind_serializes_as_type() {
        let pref = Preference::new("customCSS", "Custom CSS").with_kind("textarea");
        let json = serde_json::to_string(&pref).unwrap();
        assert!(json.contains("\"type\":\"textarea\""));
        assert!(!json.contains("\"kind\""));

        let parsed: Preference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.kind.as_deref(), Some("textarea"));
    }

    #[test]
    fn test_preference_optional_fields_omitted() {
        let pref = Preference::new("cseId", "Google CSE ID");
        let json = serde_json::to_string(&pref).unwrap();
        assert!(!json.contains("placeholder"));
        assert!(!json.contains("description"));
        assert!(!json.contains("type"));
    }

    #[test]
    fn test_preference_missing_value_defaults_to_empty() {
        let parsed: Preference =
            serde_json::from_str(r#"{"key": "cseId", "name": "Google CSE ID"}"#).unwrap();
        assert!(parsed.value.is_empty());
    }
}
