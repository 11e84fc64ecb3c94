//! Error types and handling infrastructure for stagehand.
//!
//! The error surface is deliberately small: resolution and template
//! selection are total and never fail, so the only thing that can go wrong
//! is a malformed description, and that is rejected when the description is
//! constructed rather than when it is resolved.

use thiserror::Error;

/// The main error type for stagehand operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StagehandError {
    /// A property entry was declared without a usable key. The resolved
    /// object and the generic fallback rendering both key on it, so an
    /// empty key is a caller contract violation.
    #[error("property key must be a non-empty string")]
    EmptyPropertyKey,

    /// A description arrived from the authoring layer in a shape the model
    /// cannot represent.
    #[error("invalid description: {message}")]
    InvalidDescription { message: String },
}

/// Standard Result type for stagehand operations.
pub type Result<T> = std::result::Result<T, StagehandError>;

impl StagehandError {
    /// Create an InvalidDescription error with a descriptive message
    pub fn invalid_description(message: impl Into<String>) -> Self {
        Self::InvalidDescription {
            message: message.into(),
        }
    }
}
