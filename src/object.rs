//! Resolved placeholder objects.
//!
//! Descriptions resolve into one of two runtime shapes: a plain
//! [`DynamicObject`] carrying an optional masquerade marker the template
//! selector checks, or a [`MaskedObject`] that additionally answers
//! reflective type queries for host code paths that ask an object for its
//! runtime type instead of inspecting a marker.

pub mod dynamic;
pub mod mask;

// Public re-exports for convenience. Modules outside this crate should prefer
// importing from `crate::object` rather than reaching into submodules.
pub use dynamic::{DynamicObject, MASQUERADE_KEY};
pub use mask::{MaskedObject, Member, TYPE_QUERY_MEMBER};
