//! Config command handlers

use anyhow::{bail, Context, Result};

use globalnav_core::Config;

use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;

/// Dispatch a config subcommand (defaults to `show`)
pub fn handle(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Set { key, value }) => set(key, value, output),
        Some(ConfigCommands::Show) | None => show(output),
    }
}

/// Show current configuration
fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "site_url": config.site_url
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir: {}", config.data_dir.display());
            println!(
                "  site_url: {}",
                config.site_url.as_deref().unwrap_or("(not set)")
            );
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = value.clone().into();
        }
        "site_url" => {
            config.site_url = if value.is_empty() || value == "none" {
                None
            } else {
                Some(value.clone())
            };
        }
        _ => {
            bail!(
                "Unknown configuration key: '{}'\n\
                 Valid keys: data_dir, site_url",
                key
            );
        }
    }

    config.save().context("Failed to save configuration")?;

    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
