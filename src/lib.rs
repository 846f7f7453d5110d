//! Cortex provider
//!
//! A typed client for the Cortex team roles API and the `cortex_team_role`
//! resource built on it.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod framework;
pub mod output;
pub mod provider;

pub use client::{CortexClient, TeamRolesApi, TeamRolesClient};
pub use config::ProviderConfig;
pub use error::{ApiError, ConfigError, Error, Result};
pub use provider::{CortexProvider, TeamRoleResource};
