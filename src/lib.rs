//! # stagehand - Design-Time Placeholder Data
//!
//! Synthesizes placeholder data objects for a visual designer and selects
//! the visual template used to preview them, so a UI layout can be designed
//! against realistic-looking content before any real data source exists.
//!
//! ## Features
//!
//! - **Declarative descriptions**: records and collections authored as
//!   plain description trees, no schema required
//! - **Masquerading**: a placeholder object can declare a host type so the
//!   designer's type-keyed template lookup treats it as the real thing
//! - **Automatic fallback rendering**: a schema-less object with no
//!   declared type renders as a key/value listing
//! - **Type impersonation**: masked objects answer reflective type queries
//!   with their declared type, covering host code that asks an object for
//!   its runtime type instead of checking a marker
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`value`] - Dynamic value model
//! - [`description`] - Declarative description layer and its resolution
//! - [`object`] - Resolved dynamic objects, plain and type-masked
//! - [`template`] - Render-time template selection
//!
//! The host designer sits on the other side of two seams: it supplies a
//! [`template::RenderHost`] (type-keyed template catalog plus a plain-text
//! template primitive) and consumes resolved values through its own
//! binding pipeline. Everything in between is pure, synchronous
//! computation with no I/O and no state shared across calls.

// Core modules
pub mod error;
pub mod value;

// Description and resolution
pub mod description;
pub mod object;

// Render-time selection
pub mod template;

// Re-export commonly used types for convenience
pub use error::{Result, StagehandError};

// Public API surface for external usage
pub use description::{DesignNode, PropertyEntry, RecordCollection, RecordDescriptor};
pub use object::{DynamicObject, MaskedObject, Member, MASQUERADE_KEY, TYPE_QUERY_MEMBER};
pub use template::{select_template, RenderHost, UNKNOWN_LABEL};
pub use value::{TypeName, Value};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
