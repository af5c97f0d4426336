//! Agent settings loaded from the environment.

use std::env;
use std::time::Duration;

use agent_core::{load_prompt_file, AgentError};
use disaster_tools::DisasterToolsConfig;

use crate::DEFAULT_MODEL;

/// Settings for building a [`crate::DisasterAgent`].
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSettings {
    /// Model identifier handed to the runtime.
    pub model: String,

    /// Instruction override. `None` keeps the built-in instruction.
    pub instruction: Option<String>,

    /// Overall deadline for one tool call.
    pub tool_timeout: Option<Duration>,

    /// Upstream endpoints and HTTP settings for the tools.
    pub tools: DisasterToolsConfig,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            instruction: None,
            tool_timeout: None,
            tools: DisasterToolsConfig::default(),
        }
    }
}

impl AgentSettings {
    /// Create settings from environment variables.
    ///
    /// - `DISASTER_AGENT_MODEL` - model identifier (default: gemini-2.0-flash)
    /// - `DISASTER_AGENT_PROMPT_FILE` - file holding an instruction override
    /// - `DISASTER_TOOL_TIMEOUT_SECS` - per-call tool deadline (optional)
    ///
    /// Tool endpoints come from [`DisasterToolsConfig::from_env`].
    pub fn from_env() -> Result<Self, AgentError> {
        let model = env::var("DISASTER_AGENT_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        // An explicitly named prompt file must exist and be non-empty.
        let instruction = match env::var("DISASTER_AGENT_PROMPT_FILE") {
            Ok(path) => Some(load_prompt_file(&path).ok_or_else(|| {
                AgentError::Configuration(format!(
                    "DISASTER_AGENT_PROMPT_FILE '{}' is missing or empty",
                    path
                ))
            })?),
            Err(_) => None,
        };

        let tool_timeout = match env::var("DISASTER_TOOL_TIMEOUT_SECS") {
            Ok(value) => {
                let secs = value.trim().parse::<u64>().map_err(|_| {
                    AgentError::Configuration(format!(
                        "DISASTER_TOOL_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        value
                    ))
                })?;
                Some(Duration::from_secs(secs)).filter(|d| !d.is_zero())
            }
            Err(_) => None,
        };

        Ok(Self {
            model,
            instruction,
            tool_timeout,
            tools: DisasterToolsConfig::from_env(),
        })
    }
}
