use crate::config::error::ConfigError;
use crate::error::TransportError;
use thiserror::Error;

/// Crate-wide error type for building and sending Engagespot requests.
///
/// Validation failures are raised locally before any network call. Transport
/// failures are carried verbatim; non-2xx responses are not errors at this layer.
#[derive(Error, Debug)]
pub enum EngagespotError {
    /// A required string was empty or the draft is not ready to be sent
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// The underlying HTTP transport failed
    #[error("Transport error")]
    Transport(#[from] TransportError),

    /// The notification body could not be encoded
    #[error("Failed to serialize request body")]
    Serialization(#[from] serde_json::Error),

    /// Client settings were missing or invalid
    #[error("Configuration error")]
    Configuration(#[from] ConfigError),
}

impl EngagespotError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        EngagespotError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error was raised before anything hit the network
    pub fn is_validation(&self) -> bool {
        matches!(self, EngagespotError::Validation { .. })
    }
}

/// Type alias for Result with EngagespotError to simplify function signatures
pub type EngagespotResult<T> = Result<T, EngagespotError>;
