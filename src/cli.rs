//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Resolve, inspect, and persist UI themes.
#[derive(Debug, Parser)]
#[command(name = "tinge", version = Box::leak(tinge::build_info::cli_version_text().into_boxed_str()) as &str)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Override the store directory (default: ~/.config/tinge).
    #[arg(long = "store-dir", global = true)]
    pub store_dir: Option<String>,

    /// Treat the host color-scheme preference as dark.
    #[arg(long = "prefers-dark", global = true)]
    pub prefers_dark: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in preset names.
    Presets,
    /// Resolve a theme-input file into a full token set.
    Resolve {
        /// Path to a TOML theme-input file.
        input: String,
        /// Name for the resolved theme.
        #[arg(long = "name", default_value = "Custom Theme")]
        name: String,
    },
    /// Export a theme snapshot for embedding hosts.
    Export {
        /// Path to a TOML theme-input file; exports the active theme when
        /// omitted.
        input: Option<String>,
    },
    /// Show the active theme.
    Show,
    /// Activate and persist a preset name or a theme-input file.
    Set {
        /// Preset name (`light`, `dark`, `system`) or input-file path.
        target: String,
    },
    /// Remove the persisted theme choice.
    Clear,
}
