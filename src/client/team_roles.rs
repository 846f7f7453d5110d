//! Team roles client
//!
//! `GET|POST /api/v1/teams/roles` and `GET|PUT|DELETE /api/v1/teams/roles/:id`.

use std::sync::Arc;

use async_trait::async_trait;
use log::error;
use reqwest::Method;

use super::api::TeamRolesApi;
use super::cortex::{CortexClient, Route};
use super::models::{
    CreateTeamRoleRequest, TeamRole, TeamRolesListResponse, UpdateTeamRoleRequest,
};
use super::pagination::TeamRolesListParams;
use crate::error::{ApiError, Result};

/// Team roles client backed by the shared [`CortexClient`]
#[derive(Debug, Clone)]
pub struct TeamRolesClient {
    client: Arc<CortexClient>,
}

impl TeamRolesClient {
    pub fn new(client: Arc<CortexClient>) -> Self {
        Self { client }
    }
}

/// Serialize a request for logging. Failures yield an empty string.
fn request_json<T: serde::Serialize>(request: &T) -> String {
    serde_json::to_string(request).unwrap_or_default()
}

/// Log line for a failed create. Only status failures are logged.
fn create_failure_log(err: &ApiError, request: &CreateTeamRoleRequest) -> Option<String> {
    err.is_status().then(|| {
        format!(
            "Failed creating team role: {}\n\nRequest:\n{}",
            err,
            request_json(request)
        )
    })
}

/// Log line for a failed update, with the decoded envelope when present.
fn update_failure_log(err: &ApiError, request: &UpdateTeamRoleRequest) -> Option<String> {
    err.is_status().then(|| {
        let envelope = err.envelope().map(ToString::to_string).unwrap_or_default();
        format!(
            "Failed updating team role: {}\n\nRequest:\n{}\n{}",
            err,
            request_json(request),
            envelope
        )
    })
}

fn delete_failure_log(id: i64, err: &ApiError) -> String {
    format!("Could not delete team role {}: {}", id, err)
}

#[async_trait]
impl TeamRolesApi for TeamRolesClient {
    async fn get_team_role(&self, id: i64) -> Result<TeamRole> {
        let request = self
            .client
            .request(Method::GET, &Route::TeamRoles.path(Some(id)));

        self.client
            .receive(request)
            .await
            .map_err(|e| e.context(format!("could not get team role {}", id)))
    }

    async fn list_team_roles(
        &self,
        params: &TeamRolesListParams,
    ) -> Result<TeamRolesListResponse> {
        let request = self
            .client
            .request(Method::GET, &Route::TeamRoles.path(None))
            .query(&params.to_query_params());

        self.client
            .receive(request)
            .await
            .map_err(|e| e.context("could not get team roles"))
    }

    async fn create_team_role(&self, request: &CreateTeamRoleRequest) -> Result<TeamRole> {
        let builder = self
            .client
            .request(Method::POST, &Route::TeamRoles.path(None))
            .json(request);

        match self.client.receive(builder).await {
            Ok(role) => Ok(role),
            Err(err) => {
                if let Some(line) = create_failure_log(&err, request) {
                    error!("{}", line);
                }
                Err(err.context("could not create team role"))
            }
        }
    }

    async fn update_team_role(&self, request: &UpdateTeamRoleRequest) -> Result<TeamRole> {
        let builder = self
            .client
            .request(Method::PUT, &Route::TeamRoles.path(Some(request.id)))
            .json(request);

        match self.client.receive(builder).await {
            Ok(role) => Ok(role),
            Err(err) => {
                if let Some(line) = update_failure_log(&err, request) {
                    error!("{}", line);
                }
                Err(err.context(format!("could not update team role {}", request.id)))
            }
        }
    }

    async fn delete_team_role(&self, id: i64) -> Result<()> {
        let request = self
            .client
            .request(Method::DELETE, &Route::TeamRoles.path(Some(id)))
            .query(&[("id", id)]);

        self.client.receive_empty(request).await.map_err(|err| {
            error!("{}", delete_failure_log(id, &err));
            err.context(format!("could not delete team role {}", id))
        })
    }
}
