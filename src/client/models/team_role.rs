//! Team role models

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Team role as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRole {
    /// Server-assigned identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Stable user-assigned identifier
    pub tag: String,

    /// Free-form description; absent and empty both mean unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether members receive notifications for this role
    #[serde(default, skip_serializing_if = "is_false")]
    pub notifications_enabled: bool,
}

impl TeamRole {
    /// Description with the empty string collapsed to `None`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Build the create payload for this role. The id is dropped.
    pub fn to_create_request(&self) -> CreateTeamRoleRequest {
        CreateTeamRoleRequest {
            tag: self.tag.clone(),
            name: self.name.clone(),
            description: self.description().map(str::to_string),
            notifications_enabled: self.notifications_enabled,
        }
    }

    /// Build the update payload for this role.
    pub fn to_update_request(&self) -> UpdateTeamRoleRequest {
        UpdateTeamRoleRequest {
            id: self.id,
            tag: self.tag.clone(),
            name: self.name.clone(),
            description: self.description().map(str::to_string),
            notifications_enabled: self.notifications_enabled,
        }
    }
}

/// Request body for `POST /api/v1/teams/roles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRoleRequest {
    pub tag: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub notifications_enabled: bool,
}

/// Request body for `PUT /api/v1/teams/roles/:id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRoleRequest {
    pub id: i64,

    pub tag: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub notifications_enabled: bool,
}

/// Response body for `GET /api/v1/teams/roles`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamRolesListResponse {
    /// Roles in server order
    #[serde(rename = "items", default)]
    pub roles: Vec<TeamRole>,
}
