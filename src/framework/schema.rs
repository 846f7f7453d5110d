//! Resource schema metadata
//!
//! Schemas are data handed to the host. The host owns validation and plan
//! diffing; the only behavior here is what a plan modifier promises.

use std::collections::BTreeMap;

use super::value::AttrValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Int64,
    Bool,
}

/// Instructions to the host for adjusting a planned attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanModifier {
    /// Keep the prior state value when the plan would mark it unknown.
    UseStateForUnknown,
}

impl PlanModifier {
    /// Planned value after applying this modifier.
    pub fn modify(&self, prior: Option<&AttrValue>, planned: AttrValue) -> AttrValue {
        match self {
            PlanModifier::UseStateForUnknown => match (prior, &planned) {
                (Some(prior), AttrValue::Unknown) if *prior != AttrValue::Null => prior.clone(),
                _ => planned,
            },
        }
    }
}

/// One attribute in a resource schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub attribute_type: AttributeType,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub plan_modifiers: Vec<PlanModifier>,
}

impl Attribute {
    fn of(attribute_type: AttributeType) -> Self {
        Self {
            attribute_type,
            description: String::new(),
            required: false,
            optional: false,
            computed: false,
            plan_modifiers: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::of(AttributeType::String)
    }

    pub fn int64() -> Self {
        Self::of(AttributeType::Int64)
    }

    pub fn bool() -> Self {
        Self::of(AttributeType::Bool)
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn plan_modifier(mut self, modifier: PlanModifier) -> Self {
        self.plan_modifiers.push(modifier);
        self
    }
}

/// Resource schema
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }
}
