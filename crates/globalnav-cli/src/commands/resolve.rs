//! Resolve command handler

use anyhow::Result;

use globalnav_core::Store;

use crate::output::{Output, OutputFormat};

/// Resolve which configured link a referrer URL maps to
pub fn resolve(store: &Store, referrer: Option<&str>, output: &Output) -> Result<()> {
    match store.resolve_current_link(referrer) {
        Some(link) => output.print_link(link),
        None => match output.format {
            OutputFormat::Json => println!("null"),
            OutputFormat::Quiet => {}
            OutputFormat::Human => println!("No matching link."),
        },
    }
    Ok(())
}
