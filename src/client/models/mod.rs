//! Cortex API data models

mod error;
mod team_role;

pub use error::ErrorEnvelope;
pub use team_role::{
    CreateTeamRoleRequest, TeamRole, TeamRolesListResponse, UpdateTeamRoleRequest,
};
