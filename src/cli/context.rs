//! Command execution context
//!
//! Resolves configuration and builds the API client once per invocation.

use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::client::{CortexClient, TeamRolesClient};
use crate::config::ProviderConfig;
use crate::error::Result;

/// Context for command execution containing config, client, and output format.
pub struct CommandContext {
    /// Resolved configuration
    pub config: ProviderConfig,
    /// Shared API client
    pub client: Arc<CortexClient>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Precedence for each setting is: CLI flag > environment variable >
    /// config file > default.
    pub fn new(
        format: OutputFormat,
        config_path: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<Self> {
        let config = ProviderConfig::load_at(config_path)?.with_env_overrides();
        Self::from_config(format, config, base_url)
    }

    /// Create a context from already-loaded configuration.
    pub fn from_config(
        format: OutputFormat,
        mut config: ProviderConfig,
        base_url: Option<&str>,
    ) -> Result<Self> {
        if let Some(url) = base_url {
            config.base_url = Some(url.to_string());
        }

        let client = Arc::new(CortexClient::new(&config)?);

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Team roles client sharing the context's connection
    pub fn team_roles(&self) -> TeamRolesClient {
        self.client.team_roles()
    }
}
