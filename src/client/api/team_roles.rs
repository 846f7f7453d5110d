//! Team roles API trait for CRUD operations

use async_trait::async_trait;

use crate::client::models::{
    CreateTeamRoleRequest, TeamRole, TeamRolesListResponse, UpdateTeamRoleRequest,
};
use crate::client::pagination::TeamRolesListParams;
use crate::error::Result;

/// Team role management operations for the Cortex API
///
/// Every call is a single request. Nothing is cached or retried, and an
/// `Err` means no part of the typed result should be trusted.
#[async_trait]
pub trait TeamRolesApi: Send + Sync {
    // ========================================================================
    // Read Operations
    // ========================================================================

    /// Get a single team role by its server-assigned id.
    async fn get_team_role(&self, id: i64) -> Result<TeamRole>;

    /// List one page of team roles.
    ///
    /// The response carries no totals; callers advance `page` themselves.
    async fn list_team_roles(&self, params: &TeamRolesListParams)
    -> Result<TeamRolesListResponse>;

    // ========================================================================
    // Write Operations
    // ========================================================================

    /// Create a team role. The server assigns the id.
    async fn create_team_role(&self, request: &CreateTeamRoleRequest) -> Result<TeamRole>;

    /// Replace the mutable fields of the role identified by `request.id`.
    async fn update_team_role(&self, request: &UpdateTeamRoleRequest) -> Result<TeamRole>;

    /// Delete a team role.
    async fn delete_team_role(&self, id: i64) -> Result<()>;
}
