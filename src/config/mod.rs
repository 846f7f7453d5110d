//! Provider configuration
//!
//! Values come from a YAML file (default `~/.cortex/config.yaml`) and are
//! overridden by `CORTEX_API_TOKEN` / `CORTEX_BASE_URL` from the environment.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Cortex API base URL used when none is configured
pub const DEFAULT_BASE_URL: &str = "https://api.getcortexapp.com";

/// Environment variable holding the API token
pub const API_TOKEN_ENV: &str = "CORTEX_API_TOKEN";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "CORTEX_BASE_URL";

fn default_timeout_secs() -> u64 {
    30
}

/// Provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Cortex API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// API base URL, without the `/api/v1` suffix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Transport timeout for each HTTP request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".cortex").join("config.yaml"))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: ProviderConfig =
            serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing default file is not an error since the environment can
    /// supply everything. A missing explicit path is.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => {
                let default = Self::default_path()?;
                if default.exists() {
                    Self::load_from(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using `lookup` to read variables.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(API_TOKEN_ENV).filter(|t| !t.is_empty()) {
            self.api_token = Some(token);
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|u| !u.is_empty()) {
            self.base_url = Some(url);
        }
        self
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate that the client can be built from this configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_token.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigError::MissingApiToken.into());
        }

        let url = reqwest::Url::parse(self.base_url())
            .map_err(|e| ConfigError::Invalid(format!("base_url {}: {}", self.base_url(), e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "base_url must use http or https, got {}",
                url.scheme()
            ))
            .into());
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be positive".to_string()).into());
        }

        Ok(())
    }
}
