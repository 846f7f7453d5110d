//! Team role commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::TeamRole;
use crate::client::{DEFAULT_PAGE_SIZE, TeamRolesApi, TeamRolesListParams, fetch_all_team_roles};
use crate::error::Result;
use crate::output::{json, table};

/// Display format for team roles in table view
#[derive(Debug, Tabled, Serialize)]
pub struct TeamRoleDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TAG")]
    pub tag: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "NOTIFY")]
    pub notifications_enabled: bool,
}

impl From<&TeamRole> for TeamRoleDisplay {
    fn from(role: &TeamRole) -> Self {
        Self {
            id: role.id,
            tag: role.tag.clone(),
            name: role.name.clone(),
            description: role.description().unwrap_or("--").to_string(),
            notifications_enabled: role.notifications_enabled,
        }
    }
}

/// Render roles in the requested format
pub fn render(roles: &[TeamRole], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<TeamRoleDisplay> = roles.iter().map(TeamRoleDisplay::from).collect();
            Ok(table::format_table(&rows))
        }
        OutputFormat::Json => Ok(json::format_json(roles)?),
    }
}

fn render_one(role: &TeamRole, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => render(std::slice::from_ref(role), format),
        OutputFormat::Json => Ok(json::format_json(role)?),
    }
}

/// Run the team-role get command
pub async fn get(ctx: &CommandContext, id: i64) -> Result<()> {
    let role = ctx.team_roles().get_team_role(id).await?;
    println!("{}", render_one(&role, ctx.format)?);
    Ok(())
}

/// Run the team-role list command
pub async fn list(
    ctx: &CommandContext,
    params: TeamRolesListParams,
    all: bool,
) -> Result<()> {
    let api = ctx.team_roles();
    let roles = if all {
        let size = params.size.unwrap_or(DEFAULT_PAGE_SIZE);
        fetch_all_team_roles(&api, size, params.query.as_deref()).await?
    } else {
        api.list_team_roles(&params).await?.roles
    };

    println!("{}", render(&roles, ctx.format)?);
    Ok(())
}

/// Run the team-role create command
pub async fn create(ctx: &CommandContext, role: TeamRole) -> Result<()> {
    let created = ctx
        .team_roles()
        .create_team_role(&role.to_create_request())
        .await?;
    println!("{}", render_one(&created, ctx.format)?);
    Ok(())
}

/// Fields to change on an existing role. The tag is fixed at creation.
#[derive(Debug, Clone, Default)]
pub struct TeamRoleChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub notifications_enabled: Option<bool>,
}

impl TeamRoleChanges {
    /// Overlay the changes on `role`. An empty description clears it.
    pub fn apply(self, mut role: TeamRole) -> TeamRole {
        if let Some(name) = self.name {
            role.name = name;
        }
        if let Some(description) = self.description {
            role.description = Some(description).filter(|d| !d.is_empty());
        }
        if let Some(enabled) = self.notifications_enabled {
            role.notifications_enabled = enabled;
        }
        role
    }
}

/// Run the team-role update command
pub async fn update(ctx: &CommandContext, id: i64, changes: TeamRoleChanges) -> Result<()> {
    let api = ctx.team_roles();
    let current = api.get_team_role(id).await?;
    let updated = api
        .update_team_role(&changes.apply(current).to_update_request())
        .await?;
    println!("{}", render_one(&updated, ctx.format)?);
    Ok(())
}

/// Run the team-role delete command
pub async fn delete(ctx: &CommandContext, id: i64) -> Result<()> {
    ctx.team_roles().delete_team_role(id).await?;
    if ctx.format == OutputFormat::Table {
        println!("Deleted team role {}", id);
    }
    Ok(())
}
