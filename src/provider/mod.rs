//! Cortex provider
//!
//! Turns provider configuration into the shared [`CortexClient`] and lists
//! the resources the provider serves.

use std::sync::Arc;

use log::debug;

use crate::client::CortexClient;
use crate::config::ProviderConfig;
use crate::error::{ConfigError, Error};
use crate::framework::{Diagnostics, ProviderData, ResourceWithImportState};

pub mod team_role;
pub mod team_role_models;

pub use team_role::TeamRoleResource;
pub use team_role_models::TeamRoleResourceModel;

/// Builds a fresh, unconfigured resource
pub type ResourceFactory = fn() -> Box<dyn ResourceWithImportState>;

/// Provider metadata reported to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub type_name: String,
    pub version: String,
}

/// The Cortex provider
#[derive(Debug, Clone)]
pub struct CortexProvider {
    version: String,
}

impl Default for CortexProvider {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

impl CortexProvider {
    pub const TYPE_NAME: &'static str = "cortex";

    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: Self::TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    /// Build the shared client from configuration.
    ///
    /// Returns `None` with error diagnostics when the configuration is
    /// unusable.
    pub fn configure(
        &self,
        config: &ProviderConfig,
        diagnostics: &mut Diagnostics,
    ) -> Option<ProviderData> {
        match CortexClient::new(config) {
            Ok(client) => {
                debug!("Configured Cortex client for {}", client.base_url());
                let data: ProviderData = Arc::new(client);
                Some(data)
            }
            Err(Error::Config(ConfigError::MissingApiToken)) => {
                diagnostics.add_attribute_error(
                    "api_token",
                    "Missing Cortex API Token",
                    "The provider cannot create the Cortex API client because the API token \
                     is missing. Set CORTEX_API_TOKEN or configure api_token.",
                );
                None
            }
            Err(err) => {
                diagnostics.add_error("Unable to Create Cortex API Client", err.to_string());
                None
            }
        }
    }

    /// Resources served by this provider
    pub fn resources(&self) -> Vec<ResourceFactory> {
        vec![team_role_resource as ResourceFactory]
    }
}

fn team_role_resource() -> Box<dyn ResourceWithImportState> {
    Box::new(TeamRoleResource::new())
}
