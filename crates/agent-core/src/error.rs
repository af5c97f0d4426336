//! Error types for agent registration.

use thiserror::Error;

/// Errors raised while building or exporting an agent registration.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Two tools were registered under the same name.
    #[error("Duplicate tool definition: {0}")]
    DuplicateTool(String),

    /// Serialization of the registration failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
