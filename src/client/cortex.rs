//! Cortex HTTP client
//!
//! Owns the configured `reqwest` client and the request/response plumbing
//! shared by every resource client.

use std::sync::Arc;

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::models::ErrorEnvelope;
use super::team_roles::TeamRolesClient;
use crate::config::ProviderConfig;
use crate::error::{ApiError, ConfigError, Result};

/// Path prefix for every versioned API route
const API_PREFIX: &str = "/api/v1";

/// Named API routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    TeamRoles,
}

impl Route {
    fn collection(self) -> &'static str {
        match self {
            Route::TeamRoles => "teams/roles",
        }
    }

    /// Path for the collection, or for one member when `id` is given.
    pub fn path(self, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("{}/{}/{}", API_PREFIX, self.collection(), id),
            None => format!("{}/{}", API_PREFIX, self.collection()),
        }
    }
}

/// Shared Cortex API client
///
/// Cheap to share behind an `Arc`; holds no mutable state after
/// construction.
#[derive(Debug, Clone)]
pub struct CortexClient {
    http: HttpClient,
    base_url: String,
}

impl CortexClient {
    /// Create a client from validated configuration
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        config.validate()?;

        let token = config.api_token.as_deref().unwrap_or_default();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ConfigError::Invalid("API token contains invalid characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = HttpClient::builder()
            .default_headers(headers)
            .user_agent(concat!("cortex-provider/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Team roles client sharing this connection
    pub fn team_roles(self: &Arc<Self>) -> TeamRolesClient {
        TeamRolesClient::new(Arc::clone(self))
    }

    /// Start a request against a path relative to the base URL
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}{}", method, self.base_url, path);
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    /// Send a request and decode a JSON body from a 2xx response
    pub(crate) async fn receive<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> std::result::Result<T, ApiError> {
        let response = self.send(request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    /// Send a request, ignoring the body of any 2xx response
    pub(crate) async fn receive_empty(
        &self,
        request: RequestBuilder,
    ) -> std::result::Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> std::result::Result<Response, ApiError> {
        let response = request.send().await.map_err(ApiError::from)?;
        handle_response_status(response).await
    }
}

/// Pass 2xx responses through and turn anything else into `ApiError::Status`
async fn handle_response_status(response: Response) -> std::result::Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let envelope = serde_json::from_str::<ErrorEnvelope>(&body).ok();
    debug!("API returned {} with body: {}", status, body);

    Err(ApiError::Status {
        status: status.as_u16(),
        envelope,
    })
}
