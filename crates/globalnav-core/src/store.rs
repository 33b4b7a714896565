//! Unified storage interface
//!
//! The `Store` owns the navigation document and coordinates:
//! - the in-memory collections (links, preferences)
//! - JSON persistence (explicit, awaited flush)
//! - the match resolver and preference projection
//!
//! ## Read-after-write
//!
//! Mutations apply in memory first, so any reader invoked afterwards
//! observes the new state even before the flush completes. Durability is
//! the awaited flush; a mutating operation only returns `Ok` once the
//! document has been written. A flush failure leaves the in-memory state
//! ahead of disk and is always surfaced to the caller.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open().await?;  // Creates or loads existing
//!
//! store.replace_links(links).await?;
//!
//! let current = store.resolve_current_link(Some(referrer));
//! ```

use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::document::NavDocument;
use crate::models::{Link, Preference};
use crate::resolver;
use crate::storage::{preferences_map, JsonPersistence};

/// Unified storage interface for the navigation bar
///
/// Owns the document for its whole process lifecycle; pass the store
/// explicitly to every component that needs the collections.
pub struct Store {
    /// The navigation document
    doc: NavDocument,
    /// JSON persistence handler
    persistence: JsonPersistence,
    /// Configuration
    config: Config,
}

impl Store {
    /// Open the store, creating a new document if none exists
    ///
    /// On first run:
    /// - Creates an empty document and saves it to disk
    /// - Seeds the default preference set and flushes it
    ///
    /// On subsequent runs:
    /// - Loads the existing document; seeding is skipped as soon as the
    ///   preferences collection is non-empty
    pub async fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Self::open_with_config(config).await
    }

    /// Open the store with a specific configuration
    pub async fn open_with_config(config: Config) -> Result<Self> {
        let persistence = JsonPersistence::new(config.clone());

        let doc = persistence
            .load_or_create()
            .await
            .context("Failed to load or create navigation document")?;

        let mut store = Self {
            doc,
            persistence,
            config,
        };
        store.bootstrap().await?;
        Ok(store)
    }

    /// One-shot default seeding, guarded by the emptiness predicate
    ///
    /// A one-time bootstrap, not a reconciliation: once the collection is
    /// non-empty it is never re-seeded, even if seeded keys were later
    /// removed or the default set grows in a future version.
    async fn bootstrap(&mut self) -> Result<()> {
        if self.doc.preferences_is_empty() {
            debug!("empty preferences collection, seeding defaults");
            self.doc.push_preferences(Preference::defaults());
            self.flush()
                .await
                .context("Failed to flush seeded preferences")?;
        } else {
            debug!("preferences already seeded, leaving the collection as is");
        }
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if this is a new store (no links configured yet)
    pub fn is_new(&self) -> bool {
        self.doc.links_is_empty()
    }

    // ==================== Link Operations ====================

    /// Get all links, in collection order
    pub fn get_links(&self) -> &[Link] {
        self.doc.links()
    }

    /// Get count of links
    pub fn link_count(&self) -> usize {
        self.doc.link_count()
    }

    /// Replace the whole links collection: clear, push, flush
    pub async fn replace_links(&mut self, links: Vec<Link>) -> Result<()> {
        info!(count = links.len(), "replacing navigation links");
        self.doc.replace_links(links);
        self.flush().await.context("Failed to save updated links")
    }

    /// Resolve which link the visitor came from, for highlighting
    ///
    /// Operates on the live collection; see `resolver` for the matching
    /// rules.
    pub fn resolve_current_link(&self, referrer: Option<&str>) -> Option<&Link> {
        resolver::resolve_current_link(self.doc.links(), referrer)
    }

    // ==================== Preference Operations ====================

    /// Get all preferences, in collection order
    pub fn get_preferences(&self) -> &[Preference] {
        self.doc.preferences()
    }

    /// Get count of preferences
    pub fn preference_count(&self) -> usize {
        self.doc.preference_count()
    }

    /// Get the first preference with the given key
    pub fn find_preference(&self, key: &str) -> Option<&Preference> {
        self.doc.find_preference(key)
    }

    /// Get the flat key-to-value mapping used by the render path
    pub fn get_preferences_map(&self) -> HashMap<String, String> {
        preferences_map(self.doc.preferences())
    }

    /// Update a preference's value and flush
    ///
    /// An unknown key fails before any mutation; nothing is flushed.
    pub async fn update_preference_value(&mut self, key: &str, value: &str) -> Result<()> {
        debug!(key, "updating preference value");
        self.doc.set_preference_value(key, value)?;
        self.flush()
            .await
            .with_context(|| format!("Failed to save preference '{}'", key))
    }

    // ==================== Persistence ====================

    /// Write the full in-memory document to disk
    ///
    /// Awaited by every mutating operation before it reports success.
    pub async fn flush(&mut self) -> Result<()> {
        self.persistence
            .save(&self.doc)
            .await
            .context("Failed to flush navigation document")
    }
}
