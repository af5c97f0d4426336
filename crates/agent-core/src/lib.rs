//! Runtime-facing contract for the disaster information agent.
//!
//! The conversational runtime that picks tools and talks to the model lives
//! outside this workspace. This crate defines what we hand it:
//!
//! - [`ToolDefinition`] - Name, description and JSON Schema for one tool
//! - [`ToolExecutor`] - Trait a runtime calls to run a tool by name
//! - [`ToolRequest`] / [`ToolResult`] - Call and result envelopes
//! - [`AgentSpec`] - Agent registration: model, instruction and tool list
//!
//! # Example
//!
//! ```rust
//! use agent_core::{AgentSpec, ToolDefinition};
//!
//! let spec = AgentSpec::new("echo_agent", "gemini-2.0-flash")
//!     .with_instruction("Repeat what the user says.")
//!     .with_tool(ToolDefinition::function(
//!         "echo",
//!         "Echoes the input",
//!         serde_json::json!({"type": "object", "properties": {}}),
//!     ));
//!
//! assert_eq!(spec.tools.len(), 1);
//! ```

mod agent;
mod definition;
mod error;
mod prompt;
mod tools;

pub use agent::AgentSpec;
pub use definition::{FunctionDefinition, ToolDefinition};
pub use error::AgentError;
pub use prompt::{hash_prompt, load_prompt_file};
pub use tools::{ToolExecutor, ToolRequest, ToolResult};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
