//! Global Navigation Core Library
//!
//! This crate provides the core functionality for the shared global
//! navigation bar: a small embedded document store holding the configured
//! links and preferences, and the referrer-based matching that decides
//! which link represents the visitor's current location.
//!
//! # Architecture
//!
//! - **Document store**: both collections live in one JSON document on
//!   disk; mutations apply in memory and are made durable by an explicit,
//!   awaited flush.
//! - **Match resolver**: a pure function over the link collection and the
//!   incoming referrer URL.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open().await?;
//!
//! // Replace the configured links
//! store.replace_links(vec![Link::new("1", "Home", "https://example.com/")]).await?;
//!
//! // Resolve the visitor's current location
//! let current = store.resolve_current_link(Some("https://example.com/"));
//! ```
//!
//! # Modules
//!
//! - `store`: unified storage interface (main entry point)
//! - `models`: data structures for links and preferences
//! - `document`: the in-memory navigation document
//! - `resolver`: referrer-based link matching
//! - `storage`: JSON persistence and the preference projection
//! - `config`: application configuration

pub mod config;
pub mod document;
pub mod models;
pub mod resolver;
pub mod storage;
pub mod store;

pub use config::Config;
pub use document::{DocumentError, NavDocument};
pub use models::{Link, Preference};
pub use resolver::resolve_current_link;
pub use storage::{preferences_map, JsonPersistence, StorageError};
pub use store::Store;
