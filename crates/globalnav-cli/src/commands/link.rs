//! Link command handlers

use std::path::Path;

use anyhow::{Context, Result};

use globalnav_core::{Link, Store};

use crate::output::Output;

/// List all links
pub fn list(store: &Store, output: &Output) -> Result<()> {
    output.print_links(store.get_links());
    Ok(())
}

/// Replace the whole collection from a JSON file
///
/// The file holds a JSON array of `{id, name, url}` objects; the
/// existing collection is discarded wholesale, matching the admin-panel
/// edit flow.
pub async fn replace(store: &mut Store, file: &Path, output: &Output) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read links file: {:?}", file))?;
    let links: Vec<Link> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse links file: {:?}", file))?;

    let count = links.len();
    store
        .replace_links(links)
        .await
        .context("Failed to replace links")?;

    output.success(&format!("Global navigation links updated ({} links).", count));
    Ok(())
}
