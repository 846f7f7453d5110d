//! Team role state model

use crate::client::models::TeamRole;
use crate::framework::{AttributeReader, Attributes, Diagnostics, Model, Value};

/// Team role as persisted by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoleResourceModel {
    pub id: Value<i64>,
    pub tag: Value<String>,
    pub name: Value<String>,
    pub description: Value<String>,
    pub notifications_enabled: Value<bool>,
}

impl TeamRoleResourceModel {
    /// Overwrite every attribute from an API entity.
    ///
    /// An empty description becomes null.
    pub fn update_from_api_model(&mut self, entity: &TeamRole) {
        self.id = Value::known(entity.id);
        self.tag = Value::known(entity.tag.clone());
        self.name = Value::known(entity.name.clone());
        self.description = entity.description().map(str::to_string).into();
        self.notifications_enabled = Value::known(entity.notifications_enabled);
    }

    /// Wire entity for this state. Null or unknown values become zero values.
    pub fn to_api_model(&self) -> TeamRole {
        TeamRole {
            id: self.id.value_or_default(),
            tag: self.tag.value_or_default(),
            name: self.name.value_or_default(),
            description: self
                .description
                .as_known()
                .filter(|d| !d.is_empty())
                .cloned(),
            notifications_enabled: self.notifications_enabled.value_or_default(),
        }
    }
}

impl From<&TeamRole> for TeamRoleResourceModel {
    fn from(entity: &TeamRole) -> Self {
        let mut model = Self::default();
        model.update_from_api_model(entity);
        model
    }
}

impl Model for TeamRoleResourceModel {
    fn from_attributes(attrs: &AttributeReader<'_>) -> Result<Self, Diagnostics> {
        let model = Self {
            id: attrs.get("id"),
            tag: attrs.get("tag"),
            name: attrs.get("name"),
            description: attrs.get("description"),
            notifications_enabled: attrs.get("notifications_enabled"),
        };
        attrs.finish(model)
    }

    fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs.insert("id".to_string(), self.id.clone().into_attr());
        attrs.insert("tag".to_string(), self.tag.clone().into_attr());
        attrs.insert("name".to_string(), self.name.clone().into_attr());
        attrs.insert("description".to_string(), self.description.clone().into_attr());
        attrs.insert(
            "notifications_enabled".to_string(),
            self.notifications_enabled.clone().into_attr(),
        );
        attrs
    }
}
