//! Global Navigation CLI
//!
//! Admin command-line interface for the shared navigation bar: edit the
//! configured links and preferences, and inspect how a referrer resolves.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use globalnav_core::Store;

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "globalnav")]
#[command(about = "Admin tool for the shared global navigation bar")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage navigation links
    Links {
        #[command(subcommand)]
        command: LinkCommands,
    },
    /// Manage navigation preferences
    Prefs {
        #[command(subcommand)]
        command: PrefCommands,
    },
    /// Resolve which link a referrer URL maps to
    Resolve {
        /// Referrer URL (omit to simulate a missing Referer header)
        referrer: Option<String>,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show status (document path, record counts)
    Status,
}

#[derive(Subcommand)]
enum LinkCommands {
    /// List all links
    #[command(alias = "ls")]
    List,
    /// Replace the whole collection from a JSON array of links
    Replace {
        /// Path to a JSON file: [{"id": ..., "name": ..., "url": ...}, ...]
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum PrefCommands {
    /// List all preferences
    #[command(alias = "ls")]
    List,
    /// Set a preference value
    Set {
        /// Preference key (e.g. cseId)
        key: String,
        /// New value
        value: String,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, site_url)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return commands::config::handle(command.clone(), &output);
    }

    let mut store = Store::open().await?;
    debug!(
        document = %store.config().db_path().display(),
        "opened navigation store"
    );

    match cli.command {
        Commands::Links { command } => match command {
            LinkCommands::List => commands::link::list(&store, &output),
            LinkCommands::Replace { file } => {
                commands::link::replace(&mut store, &file, &output).await
            }
        },
        Commands::Prefs { command } => match command {
            PrefCommands::List => commands::pref::list(&store, &output),
            PrefCommands::Set { key, value } => {
                commands::pref::set(&mut store, &key, &value, &output).await
            }
        },
        Commands::Resolve { referrer } => {
            commands::resolve::resolve(&store, referrer.as_deref(), &output)
        }
        Commands::Config { .. } => unreachable!(), // Handled above
        Commands::Status => commands::status::show(&store, &output),
    }
}
