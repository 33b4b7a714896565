//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use globalnav_core::{Link, Preference};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a success message (suppressed in quiet mode)
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", message),
            OutputFormat::Json | OutputFormat::Quiet => {}
        }
    }

    /// Print a single link
    pub fn print_link(&self, link: &Link) {
        match self.format {
            OutputFormat::Human => {
                println!("{}  {}  {}", link.id, link.name, link.url);
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(link).unwrap_or_default());
            }
            OutputFormat::Quiet => {
                println!("{}", link.url);
            }
        }
    }

    /// Print the link collection
    pub fn print_links(&self, links: &[Link]) {
        match self.format {
            OutputFormat::Human => {
                if links.is_empty() {
                    println!("No links configured.");
                    return;
                }
                for link in links {
                    println!("{}  {}  {}", link.id, link.name, link.url);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(links).unwrap_or_default());
            }
            OutputFormat::Quiet => {
                for link in links {
                    println!("{}", link.url);
                }
            }
        }
    }

    /// Print the preference collection
    pub fn print_preferences(&self, prefs: &[Preference]) {
        match self.format {
            OutputFormat::Human => {
                for pref in prefs {
                    let value = if pref.value.is_empty() {
                        "(not set)"
                    } else {
                        pref.value.as_str()
                    };
                    println!("{:<16} {:<20} {}", pref.key, pref.name, value);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(prefs).unwrap_or_default());
            }
            OutputFormat::Quiet => {
                for pref in prefs {
                    println!("{}={}", pref.key, pref.value);
                }
            }
        }
    }
}
