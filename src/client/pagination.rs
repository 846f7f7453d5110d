//! Pagination helpers for the team roles listing
//!
//! The listing endpoint returns no totals, so enumerating every role means
//! asking for successive pages until one comes back short.

use log::debug;

use super::api::TeamRolesApi;
use super::models::TeamRole;
use crate::error::Result;

/// Page size used when walking the whole collection.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Query parameters for `GET /api/v1/teams/roles`.
///
/// Zero or empty values are never sent, so the server defaults apply.
///
/// # Example
/// ```ignore
/// let params = TeamRolesListParams::new().page(2).size(50).query("eng");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRolesListParams {
    /// Page number
    pub page: Option<usize>,
    /// Items per page
    pub size: Option<usize>,
    /// Free-text search
    pub query: Option<String>,
}

impl TeamRolesListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the free-text query.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Convert to `(key, value)` query pairs, skipping zero and empty values.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(page) = self.page.filter(|p| *p > 0) {
            params.push(("page", page.to_string()));
        }

        if let Some(size) = self.size.filter(|s| *s > 0) {
            params.push(("size", size.to_string()));
        }

        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            params.push(("query", query.to_string()));
        }

        params
    }
}

/// Fetch every team role by walking pages from the first one.
///
/// The server may cap `page_size`, so the first page's length is taken as
/// the effective size. Stops at an empty page or one shorter than that.
pub async fn fetch_all_team_roles(
    api: &dyn TeamRolesApi,
    page_size: usize,
    query: Option<&str>,
) -> Result<Vec<TeamRole>> {
    let page_size = page_size.max(1);
    let mut roles = Vec::new();
    let mut page = 0;
    let mut effective_size = None;

    loop {
        let mut params = TeamRolesListParams::new().page(page).size(page_size);
        if let Some(q) = query {
            params = params.query(q);
        }

        let response = api.list_team_roles(&params).await?;
        let count = response.roles.len();
        debug!("Team roles page {} returned {} items", page, count);
        roles.extend(response.roles);

        let full = *effective_size.get_or_insert(count);
        if count == 0 || count < full {
            break;
        }
        page += 1;
    }

    Ok(roles)
}
