//! Agent registration handed to the external runtime.

use serde::{Deserialize, Serialize};

use crate::definition::ToolDefinition;
use crate::error::AgentError;
use crate::prompt::hash_prompt;

/// Everything a runtime needs to stand up an agent: identity, model,
/// instruction and the tools it may call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Agent name.
    pub name: String,
    /// Model identifier the runtime should use.
    pub model: String,
    /// Short description of the agent.
    pub description: String,
    /// Natural-language instruction (system prompt).
    pub instruction: String,
    /// Callable tools.
    pub tools: Vec<ToolDefinition>,
}

impl AgentSpec {
    /// Create an agent with no instruction and no tools.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            description: String::new(),
            instruction: String::new(),
            tools: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the instruction.
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    /// Add a tool.
    pub fn with_tool(mut self, tool: ToolDefinition) -> Self {
        self.tools.push(tool);
        self
    }

    /// Add several tools.
    pub fn with_tools(mut self, tools: impl IntoIterator<Item = ToolDefinition>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Fingerprint of the current instruction.
    pub fn instruction_hash(&self) -> String {
        hash_prompt(&self.instruction)
    }

    /// Names of all declared tools, in declaration order.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Check the registration is usable: a model is set and tool names are unique.
    pub fn validate(&self) -> Result<(), AgentError> {
        if self.name.trim().is_empty() {
            return Err(AgentError::Configuration("agent name is empty".to_string()));
        }
        if self.model.trim().is_empty() {
            return Err(AgentError::Configuration("model is empty".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for name in self.tool_names() {
            if !seen.insert(name) {
                return Err(AgentError::DuplicateTool(name.to_string()));
            }
        }
        Ok(())
    }

    /// Export as a JSON manifest, including the instruction hash.
    pub fn to_manifest(&self) -> Result<serde_json::Value, AgentError> {
        self.validate()?;
        let mut manifest = serde_json::to_value(self)?;
        if let Some(obj) = manifest.as_object_mut() {
            obj.insert(
                "instruction_hash".to_string(),
                serde_json::Value::String(self.instruction_hash()),
            );
        }
        Ok(manifest)
    }
}
