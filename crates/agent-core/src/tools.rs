//! Tool execution contract between the agent runtime and tool providers.
//!
//! A runtime resolves which tool the model asked for, builds a
//! [`ToolRequest`] and hands it to a [`ToolExecutor`]. The executor always
//! answers with a [`ToolResult`]; failures are reported in-band rather than
//! raised, so the model can phrase a reply either way.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::definition::ToolDefinition;

/// Result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// The tool call ID this result corresponds to.
    pub tool_call_id: String,
    /// The result content (will be sent back to the model).
    pub content: String,
    /// Whether the tool execution succeeded.
    pub success: bool,
}

impl ToolResult {
    /// Create a successful tool result.
    pub fn success(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            success: true,
        }
    }

    /// Create a failed tool result. `content` is sent to the model as-is.
    pub fn failure(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
            success: false,
        }
    }
}

/// A request to execute a tool.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    /// Unique ID for this tool call.
    pub id: String,
    /// Name of the tool to execute.
    pub name: String,
    /// Arguments as a JSON object.
    pub arguments: HashMap<String, Value>,
}

impl ToolRequest {
    /// Create a request from already-parsed arguments.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        arguments: HashMap<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Parse arguments from a JSON string.
    ///
    /// An empty or whitespace-only string is treated as `{}`, since models
    /// commonly emit that for tools without parameters.
    pub fn from_call(
        id: String,
        name: String,
        arguments_json: &str,
    ) -> Result<Self, serde_json::Error> {
        let arguments: HashMap<String, Value> = if arguments_json.trim().is_empty() {
            HashMap::new()
        } else {
            serde_json::from_str(arguments_json)?
        };
        Ok(Self {
            id,
            name,
            arguments,
        })
    }
}

/// Trait a runtime calls to execute tools.
///
/// Implementations must be stateless from the caller's point of view: every
/// call is independent and may run concurrently with others.
///
/// # Example
///
/// ```ignore
/// use agent_core::{ToolDefinition, ToolExecutor, ToolRequest, ToolResult};
///
/// struct StaticExecutor;
///
/// #[async_trait]
/// impl ToolExecutor for StaticExecutor {
///     async fn execute(&self, request: ToolRequest) -> ToolResult {
///         match request.name.as_str() {
///             "ping" => ToolResult::success(&request.id, "pong"),
///             _ => ToolResult::failure(&request.id, "Unknown tool"),
///         }
///     }
///
///     fn supported_tools(&self) -> Vec<&str> {
///         vec!["ping"]
///     }
///
///     fn tool_definitions(&self) -> Vec<ToolDefinition> {
///         Vec::new()
///     }
/// }
/// ```
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return the result.
    async fn execute(&self, request: ToolRequest) -> ToolResult;

    /// List the tools this executor supports.
    fn supported_tools(&self) -> Vec<&str>;

    /// Descriptors for every supported tool, for registration with a runtime.
    fn tool_definitions(&self) -> Vec<ToolDefinition>;
}
