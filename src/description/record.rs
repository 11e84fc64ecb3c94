//! Record descriptions and their resolution.

use crate::description::{DesignNode, PropertyEntry};
use crate::error::Result;
use crate::object::{DynamicObject, MaskedObject};
use crate::value::TypeName;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Declarative description of one schema-less placeholder record.
///
/// Constructed by the authoring layer, resolved exactly once per consumer
/// into a dynamic object, then discarded. The optional target type tags the
/// resolved object so the host's type-keyed template lookup treats it as a
/// real instance of that type.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordDescriptor {
    properties: Vec<PropertyEntry>,
    target_type: Option<TypeName>,
}

impl RecordDescriptor {
    pub fn new(properties: Vec<PropertyEntry>) -> Self {
        Self {
            properties,
            target_type: None,
        }
    }

    /// Build a descriptor from raw key/node pairs, validating each key.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: Into<String>,
        V: Into<DesignNode>,
    {
        let properties = pairs
            .into_iter()
            .map(|(key, value)| PropertyEntry::new(key, value))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(properties))
    }

    /// Declare the host type the resolved object should masquerade as. The
    /// name must be one the host's template catalog can key on.
    pub fn masquerading_as(mut self, target_type: impl Into<TypeName>) -> Self {
        self.target_type = Some(target_type.into());
        self
    }

    pub fn properties(&self) -> &[PropertyEntry] {
        &self.properties
    }

    pub fn target_type(&self) -> Option<&TypeName> {
        self.target_type.as_ref()
    }

    /// Resolve into a fresh [`DynamicObject`].
    ///
    /// Properties are written in declared order, so a later duplicate key
    /// overwrites an earlier one. Nested records and collections resolve
    /// recursively with the same `context`; plain values are stored as-is.
    /// If a target type is declared it lands in the object's reserved
    /// masquerade slot. Never fails, and every call produces a new,
    /// independently owned object.
    pub fn resolve<C: ?Sized>(&self, context: &C) -> DynamicObject {
        let mut object = DynamicObject::new();
        for entry in &self.properties {
            object.insert(entry.key(), entry.value().resolve(context));
        }
        if let Some(target) = &self.target_type {
            object.set_masquerade(target.clone());
        }
        log::trace!(
            "resolved record: {} properties, masquerade {:?}",
            object.len(),
            self.target_type.as_ref().map(TypeName::as_str)
        );
        object
    }

    /// Resolve into the type-impersonating variant instead.
    ///
    /// Same property resolution as [`resolve`](Self::resolve); the target
    /// type becomes the declared type the masked object answers reflective
    /// type queries with.
    pub fn resolve_masked<C: ?Sized>(&self, context: &C) -> MaskedObject {
        let entries = self
            .properties
            .iter()
            .map(|entry| (entry.key().to_string(), entry.value().resolve(context)));
        MaskedObject::new(entries, self.target_type.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn properties_resolve_in_declared_order() {
        let record = RecordDescriptor::from_pairs([("first", 1i64), ("second", 2i64)]).unwrap();
        let object = record.resolve(&());

        let keys: Vec<&str> = object.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["first", "second"]);
    }

    #[test]
    fn duplicate_keys_collapse_last_write_wins() {
        let record = RecordDescriptor::from_pairs([("a", 1i64), ("a", 2i64)]).unwrap();
        let object = record.resolve(&());

        assert_eq!(object.len(), 1);
        assert_eq!(object.get("a"), Some(&Value::Int(2)));
    }

    #[test]
    fn target_type_lands_in_the_masquerade_slot() {
        let record = RecordDescriptor::from_pairs([("name", "Ada")])
            .unwrap()
            .masquerading_as("Customer");
        let object = record.resolve(&());

        assert_eq!(object.masquerade_type(), Some(&TypeName::from("Customer")));
    }

    #[test]
    fn without_target_type_no_marker_is_set() {
        let record = RecordDescriptor::from_pairs([("name", "Ada")]).unwrap();
        assert_eq!(record.resolve(&()).masquerade_type(), None);
    }

    #[test]
    fn resolving_twice_yields_independent_objects() {
        let record = RecordDescriptor::from_pairs([("n", 1i64)]).unwrap();

        let mut first = record.resolve(&());
        let second = record.resolve(&());
        assert_eq!(first, second);

        first.insert("extra", Value::Int(9));
        assert_ne!(first, second);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn masked_resolution_carries_the_declared_type() {
        let record = RecordDescriptor::from_pairs([("name", "Ada")])
            .unwrap()
            .masquerading_as("Customer");
        let masked = record.resolve_masked(&());

        assert_eq!(masked.declared_type(), Some(&TypeName::from("Customer")));
        assert_eq!(masked.get("name"), Some(&Value::from("Ada")));
    }
}
