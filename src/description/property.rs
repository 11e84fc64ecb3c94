//! Property entries and description nodes.

use crate::description::{RecordCollection, RecordDescriptor};
use crate::error::{Result, StagehandError};
use crate::value::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One named value inside a record description.
///
/// Immutable once constructed. Two entries of the same record may share a
/// key; the duplicate collapses last-write-wins when the record resolves.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyEntry {
    key: String,
    value: DesignNode,
}

impl PropertyEntry {
    /// Create an entry. The key must be non-empty; resolved objects and the
    /// generic fallback rendering both key on it.
    pub fn new(key: impl Into<String>, value: impl Into<DesignNode>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(StagehandError::EmptyPropertyKey);
        }
        Ok(Self {
            key,
            value: value.into(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &DesignNode {
        &self.value
    }
}

/// A node of a description tree: a nested record, a nested collection, or
/// a plain value passed through as-is.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DesignNode {
    Record(RecordDescriptor),
    Collection(RecordCollection),
    Value(Value),
}

impl DesignNode {
    /// Resolve this node to a runtime value.
    ///
    /// Descriptions resolve recursively with the same `context`; plain
    /// values pass through unchanged. The context is opaque here and only
    /// threaded along so nested resolutions can reach host services.
    pub fn resolve<C: ?Sized>(&self, context: &C) -> Value {
        match self {
            Self::Record(record) => Value::Object(record.resolve(context)),
            Self::Collection(collection) => Value::List(collection.resolve(context).collect()),
            Self::Value(value) => value.clone(),
        }
    }
}

impl From<Value> for DesignNode {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<RecordDescriptor> for DesignNode {
    fn from(record: RecordDescriptor) -> Self {
        Self::Record(record)
    }
}

impl From<RecordCollection> for DesignNode {
    fn from(collection: RecordCollection) -> Self {
        Self::Collection(collection)
    }
}

impl From<&str> for DesignNode {
    fn from(text: &str) -> Self {
        Self::Value(Value::from(text))
    }
}

impl From<i64> for DesignNode {
    fn from(value: i64) -> Self {
        Self::Value(Value::Int(value))
    }
}

impl From<f64> for DesignNode {
    fn from(value: f64) -> Self {
        Self::Value(Value::Float(value))
    }
}

impl From<bool> for DesignNode {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected_at_construction() {
        let err = PropertyEntry::new("", 1i64).unwrap_err();
        assert_eq!(err, StagehandError::EmptyPropertyKey);
    }

    #[test]
    fn plain_values_pass_through_unchanged() {
        let node = DesignNode::from("hello");
        assert_eq!(node.resolve(&()), Value::from("hello"));
    }

    #[test]
    fn nested_record_resolves_to_an_object() {
        let record = RecordDescriptor::new(vec![PropertyEntry::new("a", 1i64).unwrap()]);
        let node = DesignNode::from(record);

        match node.resolve(&()) {
            Value::Object(object) => assert_eq!(object.get("a"), Some(&Value::Int(1))),
            other => panic!("expected an object, got {other:?}"),
        }
    }
}
