//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod org;
pub mod repo;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// ghorg - list an organization's public repositories
#[derive(Parser, Debug)]
#[command(name = "ghorg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, plain) [default: table]
    #[arg(long, global = true, env = "GHORG_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GHORG_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// API base URL (defaults to https://api.github.com)
    #[arg(long, global = true, env = "GHORG_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHORG_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show an organization's login and repository collection URL
    Org {
        /// Organization name
        name: String,
    },

    /// List public repository names
    Repos {
        /// Organization name(s)
        #[arg(required = true)]
        names: Vec<String>,

        /// Only repositories with this license key (exact match, e.g. apache-2.0)
        #[arg(long, short = 'l')]
        license: Option<String>,
    },

    /// Display version information
    Version,
}
