//! Tool registry for managing and executing tools.

use std::collections::HashMap;
use std::sync::Arc;

use agent_core::ToolDefinition;
use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Registry for managing tools.
///
/// Tools are kept in registration order so descriptors are exported to the
/// runtime in a stable order.
pub struct ToolRegistry {
    tools: IndexMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: IndexMap::new(),
        }
    }

    /// Register a tool.
    ///
    /// If a tool with the same name already exists, it will be replaced.
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.register_shared(Arc::new(tool));
    }

    /// Register a shared tool.
    pub fn register_shared(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name().to_string();
        info!("Registering tool: {}", name);
        self.tools.insert(name, tool);
    }

    /// Get a list of registered tool names.
    pub fn list_tools(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get tool descriptions for help text.
    pub fn get_descriptions(&self) -> Vec<(&str, &str)> {
        self.tools
            .values()
            .map(|t| (t.name(), t.description()))
            .collect()
    }

    /// Descriptors for every registered tool.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.values().map(|t| t.definition()).collect()
    }

    /// Execute a tool by name with the given parameters.
    ///
    /// Returns `Err` only for dispatch problems: unknown tool, or arguments
    /// the tool rejected. Upstream failures arrive as error results.
    pub async fn execute(
        &self,
        name: &str,
        params: HashMap<String, Value>,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?;

        debug!("Executing tool '{}' with {} params", name, params.len());

        let result = tool.execute(ToolArgs::new(params)).await?;

        debug!(
            "Tool '{}' completed: success={}, fields={}",
            name,
            result.is_success(),
            result.fields.len()
        );

        Ok(result)
    }

    /// Execute a tool with JSON arguments string.
    pub async fn execute_json(&self, name: &str, args_json: &str) -> Result<ToolOutput, ToolError> {
        let args = ToolArgs::from_json(args_json)?;
        self.execute(name, args.params).await
    }

    /// Execute a tool, folding every failure into a structured error result.
    pub async fn invoke(&self, name: &str, params: HashMap<String, Value>) -> ToolOutput {
        match self.execute(name, params).await {
            Ok(output) => output,
            Err(ToolError::NotFound(name)) => ToolOutput::error(format!(
                "Unknown tool '{}'. Available tools: {}",
                name,
                self.list_tools().join(", ")
            )),
            Err(e) => ToolOutput::error(e.to_string()),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
