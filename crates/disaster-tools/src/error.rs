//! Error types for tool operations.

use thiserror::Error;

/// Errors that can occur during tool execution.
///
/// Tools convert these into structured error results at their boundary;
/// the registry surfaces them only for dispatch problems (unknown tool,
/// bad arguments).
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Upstream answered with something other than 200 OK.
    #[error("Status code: {0}")]
    UnexpectedStatus(u16),
}
