//! Ordered collections of description nodes.

use crate::description::DesignNode;
use crate::value::Value;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of description nodes.
///
/// Items may be record or collection descriptions (resolved recursively) or
/// plain values (passed through unchanged). Design-time collections are
/// hand-authored, so they are small, but resolution is still lazy: hosts
/// that consume only part of the sequence never pay for the rest.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordCollection {
    items: Vec<DesignNode>,
}

impl RecordCollection {
    pub fn new(items: Vec<DesignNode>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[DesignNode] {
        &self.items
    }

    pub fn push(&mut self, item: impl Into<DesignNode>) {
        self.items.push(item.into());
    }

    /// Resolve to a lazy, forward-only sequence of runtime values.
    ///
    /// Nothing is cached: every call re-derives fresh values from the
    /// description, which is also how the sequence restarts.
    pub fn resolve<'a, C: ?Sized>(&'a self, context: &'a C) -> impl Iterator<Item = Value> + 'a {
        self.items.iter().map(move |item| item.resolve(context))
    }
}

impl FromIterator<DesignNode> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = DesignNode>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
