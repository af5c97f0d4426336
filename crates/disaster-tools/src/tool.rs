//! Tool trait definition and types.

use std::collections::HashMap;

use agent_core::ToolDefinition;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ToolError;

/// Arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self { params }
    }

    /// Parse arguments from a JSON object string.
    pub fn from_json(args_json: &str) -> Result<Self, ToolError> {
        if args_json.trim().is_empty() {
            return Ok(Self::default());
        }
        let params: HashMap<String, Value> = serde_json::from_str(args_json)?;
        Ok(Self::new(params))
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.params
            .get(key)
            .filter(|v| !v.is_null())
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }

    /// Get an optional string parameter. Null and blank strings count as absent.
    pub fn get_string_opt(&self, key: &str) -> Option<String> {
        self.params
            .get(key)?
            .as_str()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.to_string())
    }

    /// Get an optional f64 parameter.
    ///
    /// Numeric strings such as `"4.5"` are accepted, since models sometimes
    /// quote numbers.
    pub fn get_number_opt(&self, key: &str) -> Result<Option<f64>, ToolError> {
        let invalid = || ToolError::InvalidParameter {
            name: key.to_string(),
            reason: "expected number".to_string(),
        };

        match self.params.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => s.trim().parse::<f64>().map(Some).map_err(|_| invalid()),
            Some(v) => v.as_f64().map(Some).ok_or_else(invalid),
        }
    }
}

/// Outcome tag carried by every tool result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Error,
}

/// Keys checked, in order, when a plain-text rendering of a result is needed.
const TEXT_KEYS: &[&str] = &[
    "summary",
    "resources",
    "severity_analysis",
    "severity_levels",
    "message",
    "error_message",
];

/// Output from a tool execution.
///
/// Serializes flat, e.g. `{"status": "success", "count": 0, "message": "..."}`
/// or `{"status": "error", "error_message": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Success or error.
    pub status: ToolStatus,
    /// Payload fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ToolOutput {
    /// Create an empty successful output.
    pub fn success() -> Self {
        Self {
            status: ToolStatus::Success,
            fields: Map::new(),
        }
    }

    /// Create a failed output carrying `error_message`.
    pub fn error(message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("error_message".to_string(), Value::String(message.into()));
        Self {
            status: ToolStatus::Error,
            fields,
        }
    }

    /// Add a payload field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a payload field from any serializable value.
    pub fn with_serialized<T: Serialize>(
        self,
        key: impl Into<String>,
        value: &T,
    ) -> Result<Self, ToolError> {
        let value = serde_json::to_value(value)?;
        Ok(self.with(key, value))
    }

    /// Whether the status is success.
    pub fn is_success(&self) -> bool {
        self.status == ToolStatus::Success
    }

    /// Look up a payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a string payload field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    /// The error message, when this is an error result.
    pub fn error_message(&self) -> Option<&str> {
        self.get_str("error_message")
    }

    /// Best human-readable rendering: the summary-like field if one is
    /// present, otherwise the JSON form.
    pub fn text(&self) -> String {
        TEXT_KEYS
            .iter()
            .find_map(|key| self.get_str(key))
            .map(|s| s.to_string())
            .unwrap_or_else(|| self.to_json_string())
    }

    /// Serialize to a compact JSON string.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            serde_json::json!({
                "status": "error",
                "error_message": "result could not be serialized",
            })
            .to_string()
        })
    }
}

/// Trait for tools exposed to an agent runtime.
///
/// Each tool is stateless: it turns one set of arguments into one result,
/// and reports upstream failures as [`ToolOutput::error`] rather than `Err`.
/// `Err` is reserved for argument problems the caller must fix.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema for the tool's parameters.
    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    /// Descriptor used to register the tool with a runtime.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::function(self.name(), self.description(), self.parameters())
    }

    /// Execute the tool with the given arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
