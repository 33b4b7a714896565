//! Status command handler

use anyhow::Result;

use globalnav_core::Store;

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &Store, output: &Output) -> Result<()> {
    let config = store.config();
    let db_path = config.db_path();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "db_path": db_path,
                    "site_url": config.site_url,
                    "counts": {
                        "links": store.link_count(),
                        "preferences": store.preference_count()
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", db_path.display());
        }
        OutputFormat::Human => {
            println!("Global Navigation Status");
            println!("========================");
            println!();
            println!("Document: {}", db_path.display());
            println!(
                "Site URL: {}",
                config.site_url.as_deref().unwrap_or("(not set)")
            );
            println!();
            println!("Counts:");
            println!("  links:       {}", store.link_count());
            println!("  preferences: {}", store.preference_count());
        }
    }

    Ok(())
}
