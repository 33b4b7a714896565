//! The in-memory navigation document
//!
//! `NavDocument` holds both collections (links and preferences) as one
//! document. Persistence is document-granular: a flush serializes the
//! whole document, so a write on behalf of one collection also makes the
//! other durable.
//!
//! On disk the document is a single JSON object with two top-level
//! arrays, `GlobalNavLinks` and `GlobalNavPrefs`. There is no schema
//! version field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Link, Preference};

/// Errors that can occur during document operations
#[derive(Error, Debug)]
pub enum DocumentError {
    /// A preference update named a key with no matching record
    #[error("Unknown preference key: '{0}'")]
    UnknownPreferenceKey(String),
}

/// The navigation document: links and preferences, insertion-ordered
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavDocument {
    #[serde(rename = "GlobalNavLinks", default)]
    links: Vec<Link>,
    #[serde(rename = "GlobalNavPrefs", default)]
    prefs: Vec<Preference>,
}

impl NavDocument {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// All links, in insertion order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// All preferences, in insertion order
    pub fn preferences(&self) -> &[Preference] {
        &self.prefs
    }

    /// True iff the links collection has no records
    pub fn links_is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// True iff the preferences collection has no records
    ///
    /// This is the bootstrap guard predicate: defaults are seeded only
    /// while this returns true.
    pub fn preferences_is_empty(&self) -> bool {
        self.prefs.is_empty()
    }

    /// Number of link records
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Number of preference records
    pub fn preference_count(&self) -> usize {
        self.prefs.len()
    }

    /// Replace the entire links collection in place
    ///
    /// The admin flow edits links wholesale; individual records are never
    /// patched.
    pub fn replace_links(&mut self, links: Vec<Link>) {
        self.links.clear();
        self.links.extend(links);
    }

    /// Append preferences, preserving insertion order
    ///
    /// Duplicate keys are not rejected; `find_preference` sees the first
    /// occurrence and the projection keeps the last.
    pub fn push_preferences(&mut self, prefs: impl IntoIterator<Item = Preference>) {
        self.prefs.extend(prefs);
    }

    /// Find the first preference with the given key
    pub fn find_preference(&self, key: &str) -> Option<&Preference> {
        self.prefs.iter().find(|p| p.key == key)
    }

    /// Update a preference's value in place
    ///
    /// Only `value` is mutated; the descriptive fields are left as
    /// seeded. An unknown key is an error and leaves the document
    /// untouched.
    pub fn set_preference_value(
        &mut self,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), DocumentError> {
        let pref = self
            .prefs
            .iter_mut()
            .find(|p| p.key == key)
            .ok_or_else(|| DocumentError::UnknownPreferenceKey(key.to_string()))?;
        pref.value = value.into();
        Ok(())
    }
}
