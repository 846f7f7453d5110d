//! Attribute values
//!
//! The host distinguishes an attribute that is null from one whose value is
//! not known until apply. [`Value`] carries that distinction in the typed
//! state model; [`AttrValue`] is the untyped form the host stores.

use std::fmt;

/// A typed attribute value as the host sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<T> {
    /// Explicitly absent
    Null,
    /// Will be known after apply
    Unknown,
    Known(T),
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Null
    }
}

impl<T> Value<T> {
    pub fn known(value: T) -> Self {
        Value::Known(value)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    pub fn as_known(&self) -> Option<&T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Clone + Default> Value<T> {
    /// The known value, or the type's zero value for null and unknown.
    pub fn value_or_default(&self) -> T {
        self.as_known().cloned().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Value::Known(v),
            None => Value::Null,
        }
    }
}

/// An untyped attribute value stored in state and plans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Null,
    Unknown,
    String(String),
    Int64(i64),
    Bool(bool),
}

impl AttrValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AttrValue::Null => "null",
            AttrValue::Unknown => "unknown",
            AttrValue::String(_) => String::TYPE_NAME,
            AttrValue::Int64(_) => i64::TYPE_NAME,
            AttrValue::Bool(_) => bool::TYPE_NAME,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => write!(f, "null"),
            AttrValue::Unknown => write!(f, "(known after apply)"),
            AttrValue::String(s) => write!(f, "{:?}", s),
            AttrValue::Int64(n) => write!(f, "{}", n),
            AttrValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Primitive types that can live inside an [`AttrValue`]
pub trait AttrType: Sized {
    const TYPE_NAME: &'static str;

    fn from_attr(value: &AttrValue) -> Option<Self>;

    fn into_attr(self) -> AttrValue;
}

impl AttrType for String {
    const TYPE_NAME: &'static str = "string";

    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn into_attr(self) -> AttrValue {
        AttrValue::String(self)
    }
}

impl AttrType for i64 {
    const TYPE_NAME: &'static str = "int64";

    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Int64(n) => Some(*n),
            _ => None,
        }
    }

    fn into_attr(self) -> AttrValue {
        AttrValue::Int64(self)
    }
}

impl AttrType for bool {
    const TYPE_NAME: &'static str = "bool";

    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn into_attr(self) -> AttrValue {
        AttrValue::Bool(self)
    }
}

impl<T: AttrType> Value<T> {
    /// Decode from the untyped form, failing on a type mismatch.
    pub fn from_attr(value: &AttrValue) -> Result<Self, String> {
        match value {
            AttrValue::Null => Ok(Value::Null),
            AttrValue::Unknown => Ok(Value::Unknown),
            other => T::from_attr(other).map(Value::Known).ok_or_else(|| {
                format!("expected {}, got {}", T::TYPE_NAME, other.type_name())
            }),
        }
    }

    pub fn into_attr(self) -> AttrValue {
        match self {
            Value::Null => AttrValue::Null,
            Value::Unknown => AttrValue::Unknown,
            Value::Known(v) => v.into_attr(),
        }
    }
}
