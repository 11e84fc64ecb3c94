//! Schema-less dynamic objects produced by record resolution.

use crate::value::{TypeName, Value};
use indexmap::IndexMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of the reserved masquerade slot, for hosts that surface placeholder
/// objects textually and want to label the declared type.
pub const MASQUERADE_KEY: &str = "MasqueradeAsType";

/// A resolved, schema-less placeholder object.
///
/// Conceptually an ordered mapping from string key to value plus one
/// reserved slot for the masquerade type. Keys enumerate in insertion
/// order; inserting an existing key overwrites its value without moving it.
/// The masquerade slot never appears in user-facing enumeration.
///
/// Each resolution produces a fresh instance owned by whichever visual
/// element requested it. Nothing is shared or cached between resolutions.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DynamicObject {
    entries: IndexMap<String, Value>,
    masquerade: Option<TypeName>,
}

impl DynamicObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`, replacing any earlier value for the same
    /// key. Returns the displaced value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterate user entries in insertion order. The masquerade slot is not
    /// part of this enumeration.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of stored user entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The host type this object masquerades as, when declared.
    pub fn masquerade_type(&self) -> Option<&TypeName> {
        self.masquerade.as_ref()
    }

    /// Tag this object with the host type it should masquerade as. The name
    /// must be one the host's template catalog can key on.
    pub fn set_masquerade(&mut self, target: TypeName) {
        self.masquerade = Some(target);
    }
}

impl fmt::Display for DynamicObject {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_enumerate_in_insertion_order() {
        let mut object = DynamicObject::new();
        object.insert("zeta", Value::Int(1));
        object.insert("alpha", Value::Int(2));
        object.insert("mid", Value::Int(3));

        let keys: Vec<&str> = object.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn overwriting_a_key_keeps_its_position() {
        let mut object = DynamicObject::new();
        object.insert("a", Value::Int(1));
        object.insert("b", Value::Int(2));
        let displaced = object.insert("a", Value::Int(3));

        assert_eq!(displaced, Some(Value::Int(1)));
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("a"), Some(&Value::Int(3)));

        let keys: Vec<&str> = object.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn masquerade_slot_stays_out_of_enumeration() {
        let mut object = DynamicObject::new();
        object.insert("name", Value::from("Ada"));
        object.set_masquerade(TypeName::from("Customer"));

        assert_eq!(object.len(), 1);
        assert_eq!(object.masquerade_type(), Some(&TypeName::from("Customer")));
        assert!(object.iter().all(|(key, _)| key != MASQUERADE_KEY));
    }

    #[test]
    fn test_inline_display() {
        let mut object = DynamicObject::new();
        assert_eq!(object.to_string(), "{}");

        object.insert("x", Value::Int(1));
        object.insert("label", Value::from("dot"));
        assert_eq!(object.to_string(), "{x: 1, label: dot}");
    }
}
