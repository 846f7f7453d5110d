//! Host plugin contract
//!
//! Types and traits the orchestrating host uses to drive a resource. The
//! host implementation itself lives outside this crate.

pub mod diagnostics;
pub mod resource;
pub mod schema;
pub mod state;
pub mod value;

pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use resource::{
    ConfigureRequest, ConfigureResponse, CreateRequest, CreateResponse, DeleteRequest,
    DeleteResponse, ImportStateRequest, ImportStateResponse, MetadataRequest, MetadataResponse,
    ProviderData, ReadRequest, ReadResponse, Resource, ResourceWithImportState, UpdateRequest,
    UpdateResponse,
};
pub use schema::{Attribute, AttributeType, PlanModifier, Schema};
pub use state::{AttributeReader, Attributes, Model, Plan, State};
pub use value::{AttrType, AttrValue, Value};
