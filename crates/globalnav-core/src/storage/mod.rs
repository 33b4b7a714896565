//! Storage layer
//!
//! Handles JSON document persistence and the preference projection.
//!
//! ## Architecture
//!
//! - **JSON document**: source of truth, one file holding both
//!   collections; every flush serializes the whole document
//! - **Projection**: a flat key-to-value view over the preferences,
//!   consumed by the render path

pub mod error;
pub mod persistence;
pub mod projection;

pub use error::{StorageError, StorageResult};
pub use persistence::JsonPersistence;
pub use projection::preferences_map;
