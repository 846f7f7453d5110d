//! Mock team roles client for testing
//!
//! Provides an in-memory implementation of [`TeamRolesApi`] for unit tests
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::TeamRolesApi;
use super::models::{
    CreateTeamRoleRequest, ErrorEnvelope, TeamRole, TeamRolesListResponse, UpdateTeamRoleRequest,
};
use super::pagination::TeamRolesListParams;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure stored roles and failures via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockTeamRolesClient::new()
///     .with_roles(vec![TeamRoleBuilder::new(1, "engineer").build()])
///     .await;
///
/// let role = mock.get_team_role(1).await?;
/// assert_eq!(role.tag, "engineer");
/// ```
pub struct MockTeamRolesClient {
    /// Stored roles, in insertion order
    roles: Arc<Mutex<Vec<TeamRole>>>,
    /// Next id handed out by create
    next_id: Arc<Mutex<i64>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
    /// Largest page the list endpoint will return
    max_page_size: Arc<Mutex<Option<usize>>>,
}

impl Default for MockTeamRolesClient {
    fn default() -> Self {
        Self {
            roles: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_requests: Arc::new(Mutex::new(Vec::new())),
            max_page_size: Arc::new(Mutex::new(None)),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub get_team_role: usize,
    pub list_team_roles: usize,
    pub create_team_role: usize,
    pub update_team_role: usize,
    pub delete_team_role: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.get_team_role
            + self.list_team_roles
            + self.create_team_role
            + self.update_team_role
            + self.delete_team_role
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "get_team_role")
    pub method: String,
    /// Role id for member operations
    pub id: Option<i64>,
    /// Page number for list calls
    pub page: Option<usize>,
    /// Page size for list calls
    pub size: Option<usize>,
}

fn not_found(id: i64) -> ApiError {
    ApiError::Status {
        status: 404,
        envelope: Some(ErrorEnvelope {
            http_status: Some(404),
            message: format!("Team role not found: {}", id),
            kind: Some("NOT_FOUND".to_string()),
            details: None,
        }),
    }
}

impl MockTeamRolesClient {
    /// Create a new mock client with no stored roles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure stored roles. Ids handed out by create continue after the highest.
    pub async fn with_roles(self, roles: Vec<TeamRole>) -> Self {
        let max_id = roles.iter().map(|r| r.id).max().unwrap_or(0);
        *self.roles.lock().await = roles;
        *self.next_id.lock().await = max_id + 1;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Cap the page size the list endpoint honours.
    pub async fn with_max_page_size(self, max: usize) -> Self {
        *self.max_page_size.lock().await = Some(max);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Snapshot of the stored roles.
    pub async fn roles(&self) -> Vec<TeamRole> {
        self.roles.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self, context: String) -> Result<()> {
        let mut error = self.error.lock().await;
        match error.take() {
            Some(e) => Err(e.context(context)),
            None => Ok(()),
        }
    }

    /// Record a captured request for test assertions.
    async fn capture_request(&self, method: &str, id: Option<i64>, params: Option<&TeamRolesListParams>) {
        let mut requests = self.captured_requests.lock().await;
        requests.push(CapturedRequest {
            method: method.to_string(),
            id,
            page: params.and_then(|p| p.page),
            size: params.and_then(|p| p.size),
        });
    }
}

#[async_trait]
impl TeamRolesApi for MockTeamRolesClient {
    async fn get_team_role(&self, id: i64) -> Result<TeamRole> {
        self.capture_request("get_team_role", Some(id), None).await;
        self.call_count.lock().await.get_team_role += 1;
        let context = format!("could not get team role {}", id);
        self.check_error(context.clone()).await?;

        let roles = self.roles.lock().await;
        roles
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| not_found(id).context(context))
    }

    async fn list_team_roles(
        &self,
        params: &TeamRolesListParams,
    ) -> Result<TeamRolesListResponse> {
        self.capture_request("list_team_roles", None, Some(params)).await;
        self.call_count.lock().await.list_team_roles += 1;
        self.check_error("could not get team roles".to_string()).await?;

        let roles = self.roles.lock().await;
        let matching: Vec<TeamRole> = roles
            .iter()
            .filter(|r| match params.query.as_deref() {
                Some(q) if !q.is_empty() => r.name.contains(q) || r.tag.contains(q),
                _ => true,
            })
            .cloned()
            .collect();

        let page = params.page.unwrap_or(0);
        let max = *self.max_page_size.lock().await;
        let size = match (params.size.filter(|s| *s > 0), max) {
            (Some(size), Some(max)) => Some(size.min(max)),
            (size, max) => size.or(max),
        };
        let roles = match size {
            Some(size) => matching.into_iter().skip(page * size).take(size).collect(),
            None => matching,
        };

        Ok(TeamRolesListResponse { roles })
    }

    async fn create_team_role(&self, request: &CreateTeamRoleRequest) -> Result<TeamRole> {
        self.capture_request("create_team_role", None, None).await;
        self.call_count.lock().await.create_team_role += 1;
        self.check_error("could not create team role".to_string()).await?;

        let mut next_id = self.next_id.lock().await;
        let role = TeamRole {
            id: *next_id,
            name: request.name.clone(),
            tag: request.tag.clone(),
            description: request.description.clone(),
            notifications_enabled: request.notifications_enabled,
        };
        *next_id += 1;

        self.roles.lock().await.push(role.clone());
        Ok(role)
    }

    async fn update_team_role(&self, request: &UpdateTeamRoleRequest) -> Result<TeamRole> {
        self.capture_request("update_team_role", Some(request.id), None).await;
        self.call_count.lock().await.update_team_role += 1;
        let context = format!("could not update team role {}", request.id);
        self.check_error(context.clone()).await?;

        let mut roles = self.roles.lock().await;
        let role = roles
            .iter_mut()
            .find(|r| r.id == request.id)
            .ok_or_else(|| not_found(request.id).context(context))?;

        role.name = request.name.clone();
        role.description = request.description.clone();
        role.notifications_enabled = request.notifications_enabled;

        Ok(role.clone())
    }

    async fn delete_team_role(&self, id: i64) -> Result<()> {
        self.capture_request("delete_team_role", Some(id), None).await;
        self.call_count.lock().await.delete_team_role += 1;
        let context = format!("could not delete team role {}", id);
        self.check_error(context.clone()).await?;

        let mut roles = self.roles.lock().await;
        let initial_len = roles.len();
        roles.retain(|r| r.id != id);

        if roles.len() == initial_len {
            return Err(not_found(id).context(context));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::TeamRoleBuilder;

    #[tokio::test]
    async fn test_mock_client_default_empty() {
        let mock = MockTeamRolesClient::new();
        let page = mock.list_team_roles(&TeamRolesListParams::new()).await.unwrap();
        assert!(page.roles.is_empty());
    }

    #[tokio::test]
    async fn test_mock_client_create_assigns_ids() {
        let mock = MockTeamRolesClient::new()
            .with_roles(vec![TeamRoleBuilder::new(7, "existing").build()])
            .await;

        let created = mock
            .create_team_role(&TeamRoleBuilder::new(0, "new").build().to_create_request())
            .await
            .unwrap();

        assert_eq!(created.id, 8);
        assert_eq!(mock.roles().await.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockTeamRolesClient::new()
            .with_error(ApiError::Network("Connection refused".to_string()))
            .await;

        let result = mock.list_team_roles(&TeamRolesListParams::new()).await;
        assert!(result.is_err());

        // Error is consumed, next call succeeds
        let result = mock.list_team_roles(&TeamRolesListParams::new()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_missing_role_is_not_found() {
        let mock = MockTeamRolesClient::new();
        let err = mock.get_team_role(99).await.unwrap_err();
        assert!(matches!(
            err.api_error(),
            Some(ApiError::Status { status: 404, .. })
        ));
        let err = mock.delete_team_role(99).await.unwrap_err();
        assert!(matches!(
            err.api_error(),
            Some(ApiError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_mock_client_query_filter() {
        let mock = MockTeamRolesClient::new()
            .with_roles(vec![
                TeamRoleBuilder::new(1, "engineer").build(),
                TeamRoleBuilder::new(2, "manager").build(),
            ])
            .await;

        let page = mock
            .list_team_roles(&TeamRolesListParams::new().query("man"))
            .await
            .unwrap();
        assert_eq!(page.roles.len(), 1);
        assert_eq!(page.roles[0].id, 2);
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockTeamRolesClient::new()
            .with_roles(vec![TeamRoleBuilder::new(1, "engineer").build()])
            .await;

        mock.get_team_role(1).await.unwrap();
        mock.get_team_role(1).await.unwrap();
        mock.delete_team_role(1).await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.get_team_role, 2);
        assert_eq!(counts.delete_team_role, 1);
        assert_eq!(counts.total(), 3);
    }
}
