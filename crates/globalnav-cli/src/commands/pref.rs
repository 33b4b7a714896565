//! Preference command handlers

use anyhow::{Context, Result};

use globalnav_core::Store;

use crate::output::Output;

/// List all preferences
pub fn list(store: &Store, output: &Output) -> Result<()> {
    output.print_preferences(store.get_preferences());
    Ok(())
}

/// Set a preference value
pub async fn set(store: &mut Store, key: &str, value: &str, output: &Output) -> Result<()> {
    store
        .update_preference_value(key, value)
        .await
        .context("Failed to update preference")?;

    output.success(&format!("Preferences updated: {} = {}", key, value));
    Ok(())
}
