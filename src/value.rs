//! Dynamic value model shared by descriptions and resolved objects.
//!
//! The designer previews layouts before any real data source exists, so
//! placeholder values carry no compile-time schema. Everything flows
//! through an explicit tagged enum instead of concrete host types.

use crate::object::{DynamicObject, MaskedObject};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a host type that a placeholder object can masquerade as.
///
/// Opaque to this crate beyond equality and display; the host's template
/// catalog is what keys on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// A dynamic, schema-less runtime value.
///
/// Values are produced either verbatim from a description or by resolving
/// nested descriptions into [`DynamicObject`] / [`MaskedObject`] instances.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Absent value. Renders as an empty string, the way a binding host
    /// stringifies a missing value.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A host type identifier, as answered by the reflective type query.
    Type(TypeName),
    List(Vec<Value>),
    /// A resolved schema-less record.
    Object(DynamicObject),
    /// A resolved record that impersonates a declared host type.
    Masked(MaskedObject),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Type(name) => write!(f, "{name}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(object) => write!(f, "{object}"),
            Self::Masked(masked) => write!(f, "{masked}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<TypeName> for Value {
    fn from(name: TypeName) -> Self {
        Self::Type(name)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<DynamicObject> for Value {
    fn from(object: DynamicObject) -> Self {
        Self::Object(object)
    }
}

impl From<MaskedObject> for Value {
    fn from(masked: MaskedObject) -> Self {
        Self::Masked(masked)
    }
}
