//! Error types for lifecycle resolution
//!
//! Every variant describes a configuration defect found at startup. None of
//! them are transient, so callers should surface them instead of retrying.

use thiserror::Error;

/// Result type alias for lifecycle operations
pub type Result<T, E = LifecycleError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// The configured version window is empty (`current < start`).
    #[error("Invalid configuration: current version ({current}) must be >= start version ({start})")]
    InvalidConfiguration { start: u16, current: u16 },

    /// A controller or action declares the same lifecycle attribute twice.
    #[error("({entity}) declares more than one {attribute} attribute")]
    MultipleDeclarations {
        entity: String,
        attribute: &'static str,
    },

    /// An introduced/removed pair violates the version ordering.
    #[error("Invalid lifecycle: {0}")]
    InvalidLifecycle(String),

    /// A required lifecycle fact is missing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl LifecycleError {
    pub(crate) fn invalid_lifecycle(message: impl Into<String>) -> Self {
        Self::InvalidLifecycle(message.into())
    }

    /// Returns true for ordering violations between introduced and removed versions.
    pub fn is_invalid_lifecycle(&self) -> bool {
        matches!(self, Self::InvalidLifecycle(_))
    }
}
