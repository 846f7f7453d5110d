//! State and plan objects
//!
//! The host hands the resource an object of attribute values: the prior
//! state, the planned new state, or an empty state to fill in. A null
//! object means the resource does not exist.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::diagnostics::Diagnostics;
use super::value::{AttrType, AttrValue, Value};

/// Attribute name to value
pub type Attributes = BTreeMap<String, AttrValue>;

/// A typed view over an attribute object
pub trait Model: Sized {
    /// Decode from attributes, reporting problems as diagnostics.
    fn from_attributes(attrs: &AttributeReader<'_>) -> Result<Self, Diagnostics>;

    fn to_attributes(&self) -> Attributes;
}

/// Reads typed values out of an attribute object, collecting diagnostics
pub struct AttributeReader<'a> {
    attrs: &'a Attributes,
    diagnostics: RefCell<Diagnostics>,
}

impl<'a> AttributeReader<'a> {
    pub fn new(attrs: &'a Attributes) -> Self {
        Self {
            attrs,
            diagnostics: RefCell::new(Diagnostics::new()),
        }
    }

    /// Typed attribute value. Missing attributes read as null.
    pub fn get<T: AttrType>(&self, name: &str) -> Value<T> {
        let Some(raw) = self.attrs.get(name) else {
            return Value::Null;
        };
        match Value::from_attr(raw) {
            Ok(value) => value,
            Err(detail) => {
                self.diagnostics.borrow_mut().add_attribute_error(
                    name,
                    "Invalid Attribute Value",
                    detail,
                );
                Value::Null
            }
        }
    }

    /// Hand back `model`, or the diagnostics if any read failed.
    pub fn finish<M>(&self, model: M) -> Result<M, Diagnostics> {
        let diagnostics = self.diagnostics.take();
        if diagnostics.has_error() {
            Err(diagnostics)
        } else {
            Ok(model)
        }
    }
}

/// Resource state, plan or config as held by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    attrs: Option<Attributes>,
}

/// The planned new state has the same shape as state.
pub type Plan = State;

impl State {
    /// A state for a resource that does not exist.
    pub fn null() -> Self {
        Self { attrs: None }
    }

    pub fn from_attributes(attrs: Attributes) -> Self {
        Self { attrs: Some(attrs) }
    }

    pub fn from_model<M: Model>(model: &M) -> Self {
        Self::from_attributes(model.to_attributes())
    }

    pub fn is_null(&self) -> bool {
        self.attrs.is_none()
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.attrs.as_ref()
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.as_ref()?.get(name)
    }

    /// Decode the whole object into a model.
    pub fn get<M: Model>(&self) -> Result<M, Diagnostics> {
        let Some(attrs) = &self.attrs else {
            let mut diags = Diagnostics::new();
            diags.add_error(
                "Missing State",
                "The resource has no state to decode. Please report this issue to the provider developers.",
            );
            return Err(diags);
        };
        M::from_attributes(&AttributeReader::new(attrs))
    }

    /// Replace the whole object with the model's attributes.
    pub fn set<M: Model>(&mut self, model: &M) {
        self.attrs = Some(model.to_attributes());
    }

    /// Set one attribute, creating the object if the state was null.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: AttrValue) {
        self.attrs
            .get_or_insert_with(Attributes::new)
            .insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Named {
        id: Value<i64>,
        name: Value<String>,
    }

    impl Model for Named {
        fn from_attributes(attrs: &AttributeReader<'_>) -> Result<Self, Diagnostics> {
            let model = Named {
                id: attrs.get("id"),
                name: attrs.get("name"),
            };
            attrs.finish(model)
        }

        fn to_attributes(&self) -> Attributes {
            let mut attrs = Attributes::new();
            attrs.insert("id".to_string(), self.id.clone().into_attr());
            attrs.insert("name".to_string(), self.name.clone().into_attr());
            attrs
        }
    }

    #[test]
    fn test_null_state_fails_to_decode() {
        let err = State::null().get::<Named>().unwrap_err();
        assert!(err.has_error());
    }

    #[test]
    fn test_set_then_get() {
        let model = Named {
            id: Value::known(4),
            name: Value::Unknown,
        };
        let mut state = State::null();
        state.set(&model);
        assert!(!state.is_null());
        assert_eq!(state.get::<Named>().unwrap(), model);
    }

    #[test]
    fn test_missing_attribute_reads_null() {
        let mut state = State::null();
        state.set_attribute("id", AttrValue::Int64(9));
        let model = state.get::<Named>().unwrap();
        assert_eq!(model.id, Value::known(9));
        assert_eq!(model.name, Value::Null);
    }

    #[test]
    fn test_type_mismatch_is_attribute_diagnostic() {
        let mut state = State::null();
        state.set_attribute("id", AttrValue::String("nine".to_string()));
        let diags = state.get::<Named>().unwrap_err();
        let diag = diags.errors().next().unwrap();
        assert_eq!(diag.attribute.as_deref(), Some("id"));
    }
}
