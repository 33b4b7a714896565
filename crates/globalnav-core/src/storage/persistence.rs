//! JSON document persistence
//!
//! Handles saving and loading the navigation document to/from the
//! filesystem. Uses atomic writes (write to temp file, sync, then rename)
//! to prevent corruption.
//!
//! Storage location: `<data_dir>/db.json` (configurable via `Config`).
//!
//! The flush is asynchronous and must be awaited before a mutating
//! operation reports success; between a mutation and a completed flush
//! the in-memory document runs ahead of the file.

use std::path::Path;

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::document::NavDocument;
use crate::storage::error::{StorageError, StorageResult};

/// Persistence layer for the navigation document
///
/// Provides atomic file operations for saving/loading the JSON document.
pub struct JsonPersistence {
    config: Config,
}

impl JsonPersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if a document exists on disk
    pub fn exists(&self) -> bool {
        self.config.db_path().exists()
    }

    /// Save the document to disk using an atomic write
    ///
    /// The whole document is serialized on every save: persistence is
    /// document-granular, never collection-granular.
    pub async fn save(&self, doc: &NavDocument) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(doc).map_err(StorageError::Serialize)?;
        atomic_write(&self.config.db_path(), &bytes).await
    }

    /// Load the document from disk
    ///
    /// Returns `None` if the document file doesn't exist.
    /// Returns an error if the file exists but can't be read or parsed.
    pub async fn load(&self) -> StorageResult<Option<NavDocument>> {
        let path = self.config.db_path();

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).await.map_err(|e| StorageError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let doc = serde_json::from_slice(&bytes).map_err(|e| StorageError::InvalidFormat {
            path: path.clone(),
            details: e.to_string(),
        })?;

        Ok(Some(doc))
    }

    /// Load the existing document or create an empty one
    ///
    /// If a document exists on disk, it is loaded and returned.
    /// Otherwise, an empty document is created, saved, and returned.
    pub async fn load_or_create(&self) -> StorageResult<NavDocument> {
        if let Some(doc) = self.load().await? {
            return Ok(doc);
        }

        let doc = NavDocument::new();
        self.save(&doc).await?;
        Ok(doc)
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
async fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path)
        .await
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .await
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .await
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path)
        .await
        .map_err(|e| StorageError::AtomicWriteFailed {
            from: temp_path,
            to: path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Link, Preference};
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            site_url: None,
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(test_config(&temp_dir));

        // Initially no document
        assert!(!persistence.exists());
        assert!(persistence.load().await.unwrap().is_none());

        // Create and save a document
        let mut doc = NavDocument::new();
        doc.replace_links(vec![Link::new("1", "Home", "https://a.com/")]);
        doc.push_preferences(Preference::defaults());

        persistence.save(&doc).await.unwrap();
        assert!(persistence.exists());

        // Load and verify
        let loaded = persistence.load().await.unwrap().unwrap();
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn test_load_or_create_new() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(test_config(&temp_dir));

        let doc = persistence.load_or_create().await.unwrap();
        assert!(persistence.exists());
        assert!(doc.links_is_empty());
        assert!(doc.preferences_is_empty());
    }

    #[tokio::test]
    async fn test_load_or_create_existing() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(test_config(&temp_dir));

        let mut doc = NavDocument::new();
        doc.replace_links(vec![Link::new("1", "Home", "https://a.com/")]);
        persistence.save(&doc).await.unwrap();

        // load_or_create should return the existing document
        let loaded = persistence.load_or_create().await.unwrap();
        assert_eq!(loaded.link_count(), 1);
    }

    #[tokio::test]
    async fn test_load_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        std::fs::write(config.db_path(), b"{not json").unwrap();

        let persistence = JsonPersistence::new(config);
        let err = persistence.load().await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidFormat { .. }));
    }

    #[tokio::test]
    async fn test_saved_document_uses_stable_layout() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let persistence = JsonPersistence::new(config.clone());

        let mut doc = NavDocument::new();
        doc.replace_links(vec![Link::new("1", "Home", "https://a.com/")]);
        persistence.save(&doc).await.unwrap();

        let raw = std::fs::read_to_string(config.db_path()).unwrap();
        assert!(raw.contains("\"GlobalNavLinks\""));
        assert!(raw.contains("\"GlobalNavPrefs\""));

        // No stray temp file left behind
        assert!(!config.db_path().with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("a").join("b").join("db.json");

        atomic_write(&nested_path, b"{}").await.unwrap();

        assert!(nested_path.exists());
        let content = std::fs::read_to_string(&nested_path).unwrap();
        assert_eq!(content, "{}");
    }

    #[tokio::test]
    async fn test_multiple_saves_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(test_config(&temp_dir));

        let mut doc = persistence.load_or_create().await.unwrap();
        doc.replace_links(vec![Link::new("1", "Home", "https://a.com/")]);
        persistence.save(&doc).await.unwrap();

        doc.replace_links(vec![]);
        persistence.save(&doc).await.unwrap();

        let loaded = persistence.load().await.unwrap().unwrap();
        assert!(loaded.links_is_empty());
    }
}
