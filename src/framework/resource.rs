//! Resource lifecycle contract
//!
//! The host calls these callbacks; a resource never drives the lifecycle
//! itself. Failures go into the response diagnostics, never into `Err`.

use std::any::Any;
use std::sync::Arc;

use async_trait::async_trait;

use super::diagnostics::Diagnostics;
use super::schema::Schema;
use super::state::{Plan, State};

/// Opaque value the provider hands to every resource during configure
pub type ProviderData = Arc<dyn Any + Send + Sync>;

#[derive(Debug, Clone)]
pub struct MetadataRequest {
    pub provider_type_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct MetadataResponse {
    pub type_name: String,
}

#[derive(Clone, Default)]
pub struct ConfigureRequest {
    /// `None` until the provider itself has been configured
    pub provider_data: Option<ProviderData>,
}

#[derive(Debug, Default)]
pub struct ConfigureResponse {
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub state: State,
}

/// The host pre-fills `state` with the prior state.
#[derive(Debug, Default)]
pub struct ReadResponse {
    pub state: State,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub plan: Plan,
}

/// `state` starts null.
#[derive(Debug, Default)]
pub struct CreateResponse {
    pub state: State,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub plan: Plan,
    pub state: State,
}

/// The host pre-fills `state` with the prior state.
#[derive(Debug, Default)]
pub struct UpdateResponse {
    pub state: State,
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct DeleteRequest {
    pub state: State,
}

#[derive(Debug, Default)]
pub struct DeleteResponse {
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone)]
pub struct ImportStateRequest {
    /// Identifier exactly as the user supplied it
    pub id: String,
}

#[derive(Debug, Default)]
pub struct ImportStateResponse {
    pub state: State,
    pub diagnostics: Diagnostics,
}

impl ReadResponse {
    pub fn for_request(request: &ReadRequest) -> Self {
        Self {
            state: request.state.clone(),
            diagnostics: Diagnostics::new(),
        }
    }
}

impl UpdateResponse {
    pub fn for_request(request: &UpdateRequest) -> Self {
        Self {
            state: request.state.clone(),
            diagnostics: Diagnostics::new(),
        }
    }
}

/// A managed resource type
#[async_trait]
pub trait Resource: Send + Sync {
    fn metadata(&self, request: &MetadataRequest, response: &mut MetadataResponse);

    fn schema(&self) -> Schema;

    /// Receive provider data. Called before any other lifecycle callback.
    fn configure(&mut self, request: ConfigureRequest, response: &mut ConfigureResponse);

    async fn read(&self, request: ReadRequest, response: &mut ReadResponse);

    async fn create(&self, request: CreateRequest, response: &mut CreateResponse);

    async fn update(&self, request: UpdateRequest, response: &mut UpdateResponse);

    /// On success the host removes the resource from state.
    async fn delete(&self, request: DeleteRequest, response: &mut DeleteResponse);
}

/// A resource that can adopt existing remote objects
#[async_trait]
pub trait ResourceWithImportState: Resource {
    /// Seed state from an identifier; the host follows up with `read`.
    async fn import_state(&self, request: ImportStateRequest, response: &mut ImportStateResponse);
}
