//! CLI command implementations.

pub mod config;
pub mod show;

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: String,

    /// Bearer token. Falls back to the cookie file from config.
    #[arg(short, long, env = "TRENDZ_JWT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// How to print the page.
    #[arg(short, long, value_enum, default_value_t = ShowFormat::Text)]
    pub format: ShowFormat,

    /// Press "+" this many times after loading.
    #[arg(long, default_value_t = 0)]
    pub increment: u32,

    /// Press "-" this many times after loading.
    #[arg(long, default_value_t = 0)]
    pub decrement: u32,
}

/// Page output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Full HTML document.
    Html,
    /// Plain text summary.
    Text,
    /// Page state as JSON.
    Json,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,

    /// Write a default configuration file.
    Init {
        /// Where to write it (default: ./trendz.toml).
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
