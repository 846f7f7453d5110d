//! Team role resource
//!
//! Maps the host lifecycle onto the team roles API. Each callback makes at
//! most one API call and reports failures as diagnostics.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::team_role_models::TeamRoleResourceModel;
use crate::client::{CortexClient, TeamRolesApi};
use crate::framework::{
    AttrValue, Attribute, ConfigureRequest, ConfigureResponse, CreateRequest, CreateResponse,
    DeleteRequest, DeleteResponse, Diagnostics, ImportStateRequest, ImportStateResponse,
    MetadataRequest, MetadataResponse, PlanModifier, ReadRequest, ReadResponse, Resource,
    ResourceWithImportState, Schema, UpdateRequest, UpdateResponse, Value,
};

/// Team role resource
#[derive(Default)]
pub struct TeamRoleResource {
    api: Option<Arc<dyn TeamRolesApi>>,
}

impl TeamRoleResource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resource already bound to an API implementation.
    pub fn with_api(api: Arc<dyn TeamRolesApi>) -> Self {
        Self { api: Some(api) }
    }

    fn api(&self, diagnostics: &mut Diagnostics) -> Option<&dyn TeamRolesApi> {
        if self.api.is_none() {
            diagnostics.add_error(
                "Unconfigured Client",
                "The team role resource was used before the provider was configured. \
                 Please report this issue to the provider developers.",
            );
        }
        self.api.as_deref()
    }
}

#[async_trait]
impl Resource for TeamRoleResource {
    fn metadata(&self, request: &MetadataRequest, response: &mut MetadataResponse) {
        response.type_name = format!("{}_team_role", request.provider_type_name);
    }

    fn schema(&self) -> Schema {
        Schema::new("Team Role Entity")
            .attribute(
                "tag",
                Attribute::string()
                    .required()
                    .description("Unique identifier for the team role.")
                    .plan_modifier(PlanModifier::UseStateForUnknown),
            )
            .attribute(
                "name",
                Attribute::string()
                    .required()
                    .description("Name of the team role."),
            )
            .attribute(
                "description",
                Attribute::string()
                    .optional()
                    .description("Description of the team role."),
            )
            .attribute(
                "notifications_enabled",
                Attribute::bool()
                    .optional()
                    .description("Indicates if notifications are enabled for the team role."),
            )
            .attribute(
                "id",
                Attribute::int64()
                    .computed()
                    .description("The ID of the team role."),
            )
    }

    fn configure(&mut self, request: ConfigureRequest, response: &mut ConfigureResponse) {
        // Provider not configured yet
        let Some(data) = request.provider_data else {
            return;
        };

        match data.downcast::<CortexClient>() {
            Ok(client) => self.api = Some(Arc::new(client.team_roles())),
            Err(_) => response.diagnostics.add_error(
                "Unexpected Resource Configure Type",
                "Expected a CortexClient as provider data. \
                 Please report this issue to the provider developers.",
            ),
        }
    }

    async fn read(&self, request: ReadRequest, response: &mut ReadResponse) {
        let mut data = match request.state.get::<TeamRoleResourceModel>() {
            Ok(data) => data,
            Err(diags) => return response.diagnostics.append(diags),
        };
        let Some(api) = self.api(&mut response.diagnostics) else {
            return;
        };

        let id = data.id.value_or_default();
        let entity = match api.get_team_role(id).await {
            Ok(entity) => entity,
            Err(err) => {
                response.diagnostics.add_error(
                    "Client Error",
                    format!("Unable to read team role {}, got error: {}", id, err),
                );
                return;
            }
        };

        data.update_from_api_model(&entity);
        response.state.set(&data);
    }

    async fn create(&self, request: CreateRequest, response: &mut CreateResponse) {
        let mut data = match request.plan.get::<TeamRoleResourceModel>() {
            Ok(data) => data,
            Err(diags) => return response.diagnostics.append(diags),
        };
        let Some(api) = self.api(&mut response.diagnostics) else {
            return;
        };

        let entity = data.to_api_model();
        let entity = match api.create_team_role(&entity.to_create_request()).await {
            Ok(entity) => entity,
            Err(err) => {
                response.diagnostics.add_error(
                    "Client Error",
                    format!("Unable to create team role, got error: {}", err),
                );
                return;
            }
        };
        debug!("Created team role {} ({})", entity.id, entity.tag);

        data.update_from_api_model(&entity);
        response.state.set(&data);
    }

    async fn update(&self, request: UpdateRequest, response: &mut UpdateResponse) {
        let mut data = match request.plan.get::<TeamRoleResourceModel>() {
            Ok(data) => data,
            Err(diags) => return response.diagnostics.append(diags),
        };

        // A computed id is planned as unknown; the prior state still has it.
        if !data.id.is_known() {
            if let Some(AttrValue::Int64(id)) = request.state.attribute("id") {
                data.id = Value::known(*id);
            }
        }
        if !data.id.is_known() {
            response.diagnostics.add_attribute_error(
                "id",
                "Missing Identifier",
                "Cannot update a team role without its id. Import or recreate the resource.",
            );
            return;
        }

        let Some(api) = self.api(&mut response.diagnostics) else {
            return;
        };

        let entity = data.to_api_model();
        let entity = match api.update_team_role(&entity.to_update_request()).await {
            Ok(entity) => entity,
            Err(err) => {
                response.diagnostics.add_error(
                    "Client Error",
                    format!("Unable to update team role, got error: {}", err),
                );
                return;
            }
        };

        data.update_from_api_model(&entity);
        response.state.set(&data);
    }

    async fn delete(&self, request: DeleteRequest, response: &mut DeleteResponse) {
        let data = match request.state.get::<TeamRoleResourceModel>() {
            Ok(data) => data,
            Err(diags) => return response.diagnostics.append(diags),
        };
        let Some(api) = self.api(&mut response.diagnostics) else {
            return;
        };

        let id = data.id.value_or_default();
        if let Err(err) = api.delete_team_role(id).await {
            response.diagnostics.add_error(
                "Client Error",
                format!("Unable to delete team role, got error: {}", err),
            );
        }
    }
}

#[async_trait]
impl ResourceWithImportState for TeamRoleResource {
    async fn import_state(&self, request: ImportStateRequest, response: &mut ImportStateResponse) {
        match request.id.trim().parse::<i64>() {
            Ok(id) => response.state.set_attribute("id", AttrValue::Int64(id)),
            Err(_) => response.diagnostics.add_error(
                "Unexpected Import Identifier",
                format!("Expected a numeric team role id, got: {:?}", request.id),
            ),
        }
    }
}
