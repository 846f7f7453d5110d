//! Cortex API client

pub mod api;
pub mod cortex;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;
pub mod team_roles;

pub use api::TeamRolesApi;
pub use cortex::{CortexClient, Route};
#[cfg(test)]
pub use mock::MockTeamRolesClient;
pub use pagination::{DEFAULT_PAGE_SIZE, TeamRolesListParams, fetch_all_team_roles};
pub use team_roles::TeamRolesClient;
