//! Command execution context
//!
//! Resolves configuration, output format and API base once, and hands out
//! organization clients that share a single HTTP fetcher.

use std::sync::Arc;

use clap::ValueEnum;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{DEFAULT_API_BASE, HttpFetcher, OrgClient};
use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Context for command execution containing config, fetcher, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Output format after applying flag > config > default
    pub format: OutputFormat,
    /// API base URL after applying flag > config > default
    pub api_base: String,
    fetcher: Arc<HttpFetcher>,
}

impl CommandContext {
    /// Load config and resolve the effective options.
    ///
    /// # Errors
    /// Returns error if an explicit config file is missing or invalid, or if
    /// the configured output format is unknown.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let format = resolve_format(opts.format, &config)?;
        let api_base = opts
            .api_host_ref()
            .or(config.api_host.as_deref())
            .unwrap_or(DEFAULT_API_BASE)
            .to_string();

        log::debug!("Using API base {} with {:?} output", api_base, format);

        Ok(Self {
            config,
            format,
            api_base,
            fetcher: Arc::new(HttpFetcher::new()?),
        })
    }

    /// New client for `org_name`; each client has its own memoized state.
    pub fn org_client(&self, org_name: &str) -> OrgClient<HttpFetcher> {
        OrgClient::new(org_name, Arc::clone(&self.fetcher)).with_api_base(&self.api_base)
    }
}

fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> Result<OutputFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }

    match config.preferences.format.as_deref() {
        Some(name) => OutputFormat::from_str(name, true).map_err(|_| {
            ConfigError::Invalid(format!("unknown output format '{}'", name)).into()
        }),
        None => Ok(OutputFormat::default()),
    }
}
