//! Type-impersonating dynamic objects.
//!
//! Some host integration points never look at a masquerade marker; they
//! determine rendering strategy by asking an object for its reflective
//! runtime type. [`MaskedObject`] serves that path: it holds the same kind
//! of property snapshot as a plain dynamic object but intercepts the type
//! query and answers with its declared type, so masquerading works no
//! matter which mechanism the host uses.

use crate::value::{TypeName, Value};
use indexmap::IndexMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Member name reflective hosts use to ask a value for its runtime type.
pub const TYPE_QUERY_MEMBER: &str = "GetType";

/// Outcome of reading a member from a [`MaskedObject`].
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    /// An ordinary stored property value.
    Value(Value),
    /// Deferred handle for the reflective type query. Resolve it with
    /// [`MaskedObject::invoke`].
    TypeQuery,
}

/// A dynamic object over a fixed property snapshot that impersonates a
/// declared host type when queried for its type identity.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaskedObject {
    properties: IndexMap<String, Value>,
    declared_type: Option<TypeName>,
}

impl MaskedObject {
    /// Build the property snapshot once from a key/value sequence. Later
    /// duplicates overwrite earlier ones, keeping the key's first position.
    pub fn new(
        properties: impl IntoIterator<Item = (String, Value)>,
        declared_type: Option<TypeName>,
    ) -> Self {
        let mut snapshot = IndexMap::new();
        for (key, value) in properties {
            snapshot.insert(key, value);
        }
        Self {
            properties: snapshot,
            declared_type,
        }
    }

    /// The host type this object impersonates, when declared.
    pub fn declared_type(&self) -> Option<&TypeName> {
        self.declared_type.as_ref()
    }

    /// Read a member by name.
    ///
    /// With a declared type set, the reflective type query name reports a
    /// deferred invocation handle and shadows any stored property of the
    /// same name. Without one, it is an ordinary lookup.
    pub fn read(&self, name: &str) -> Option<Member> {
        if self.declared_type.is_some() && name == TYPE_QUERY_MEMBER {
            return Some(Member::TypeQuery);
        }
        self.properties.get(name).cloned().map(Member::Value)
    }

    /// Invoke a member by name.
    ///
    /// Only the reflective type query is handled, and only when a declared
    /// type is set: it answers with that type rather than anything about
    /// the object's true dynamic nature. Everything else is unhandled and
    /// returns `None`.
    pub fn invoke(&self, name: &str, _args: &[Value]) -> Option<Value> {
        match (&self.declared_type, name) {
            (Some(declared), TYPE_QUERY_MEMBER) => Some(Value::Type(declared.clone())),
            _ => None,
        }
    }

    /// Insert or overwrite a property. Always succeeds; overwriting keeps
    /// the key's position.
    pub fn write(&mut self, name: impl Into<String>, value: Value) {
        self.properties.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Iterate stored properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl fmt::Display for MaskedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}
