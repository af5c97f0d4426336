//! The natural-disaster information agent.
//!
//! Bundles the agent registration (name, model, description, instruction)
//! with the disaster tool registry so a conversational runtime can stand the
//! agent up and route tool calls back to it.

mod config;

use agent_core::{AgentError, AgentSpec, ToolExecutor, ToolRequest, ToolResult};
use disaster_tools::{registry_with_config, RegistryToolExecutor, ToolPolicy};

pub use config::AgentSettings;

/// Agent name used for registration.
pub const AGENT_NAME: &str = "disaster_info_agent";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// One-line description shown to the runtime.
pub const DESCRIPTION: &str = "Agent that provides real-time information about natural disasters \
from official sources and Bluesky emergency tweets.";

/// Built-in instruction.
pub const INSTRUCTION: &str = "\
You are a helpful assistant specializing in natural disaster information and emergency preparedness.
You help users understand natural disasters mentioned in Bluesky tweets and provide critical safety information.

Your role is to:
- Provide real-time information about active disasters using official data sources (USGS, NOAA, NHC, etc.)
- Offer clear, accurate summaries of different types of natural disasters
- Provide safety tips and emergency resources
- Analyze disaster severity based on measurements
- Answer questions about disaster preparedness

You have access to real-time data from:
- NOAA National Weather Service (weather alerts)
- USGS (earthquake data)
- National Hurricane Center (active hurricanes)
- Wildfire information resources

When users ask about current events or active disasters, ALWAYS check the real-time data functions first.
Always prioritize safety and encourage users to follow official emergency guidance and evacuation orders.
When discussing active disasters, remind users to follow local authorities and emergency services.

If real-time data is unavailable, clearly state this and provide general information instead.";

/// Agent registration plus the executor that serves its tool calls.
pub struct DisasterAgent {
    spec: AgentSpec,
    executor: RegistryToolExecutor,
}

impl DisasterAgent {
    /// Build the agent from explicit settings.
    pub fn new(settings: &AgentSettings) -> Result<Self, AgentError> {
        let mut policy = ToolPolicy::default();
        if let Some(timeout) = settings.tool_timeout {
            policy = policy.with_timeout(timeout);
        }
        let executor =
            RegistryToolExecutor::with_policy(registry_with_config(&settings.tools), policy);

        let instruction = settings
            .instruction
            .clone()
            .unwrap_or_else(|| INSTRUCTION.to_string());

        let spec = AgentSpec::new(AGENT_NAME, settings.model.clone())
            .with_description(DESCRIPTION)
            .with_instruction(instruction)
            .with_tools(executor.tool_definitions());
        spec.validate()?;

        tracing::info!(
            "Built agent '{}' on {} with {} tools",
            spec.name,
            spec.model,
            spec.tools.len()
        );

        Ok(Self { spec, executor })
    }

    /// Build the agent from environment variables.
    pub fn from_env() -> Result<Self, AgentError> {
        Self::new(&AgentSettings::from_env()?)
    }

    pub fn spec(&self) -> &AgentSpec {
        &self.spec
    }

    pub fn executor(&self) -> &RegistryToolExecutor {
        &self.executor
    }

    /// Registration manifest as JSON.
    pub fn manifest(&self) -> Result<serde_json::Value, AgentError> {
        self.spec.to_manifest()
    }

    /// Serve one tool call.
    pub async fn handle(&self, request: ToolRequest) -> ToolResult {
        self.executor.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::time::Duration;

    fn agent() -> DisasterAgent {
        DisasterAgent::new(&AgentSettings::default()).unwrap()
    }

    #[test]
    fn test_registration_defaults() {
        let agent = agent();
        let spec = agent.spec();

        assert_eq!(spec.name, "disaster_info_agent");
        assert_eq!(spec.model, "gemini-2.0-flash");
        assert_eq!(spec.instruction, INSTRUCTION);
        assert_eq!(
            spec.tool_names(),
            vec![
                "get_disaster_summary",
                "get_emergency_resources",
                "analyze_disaster_severity",
                "get_active_hurricanes",
                "get_recent_earthquakes",
                "get_active_wildfires",
                "get_weather_alerts",
            ]
        );
    }

    #[test]
    fn test_manifest() {
        let manifest = agent().manifest().unwrap();

        assert_eq!(manifest["name"], AGENT_NAME);
        assert_eq!(manifest["description"], DESCRIPTION);
        assert_eq!(manifest["tools"].as_array().unwrap().len(), 7);
        assert_eq!(
            manifest["instruction_hash"],
            agent_core::hash_prompt(INSTRUCTION)
        );
        assert_eq!(manifest["tools"][0]["function"]["name"], "get_disaster_summary");
    }

    #[test]
    fn test_settings_flow_through() {
        let settings = AgentSettings {
            model: "gemini-test".to_string(),
            instruction: Some("Only discuss floods.".to_string()),
            tool_timeout: Some(Duration::from_secs(3)),
            ..AgentSettings::default()
        };
        let agent = DisasterAgent::new(&settings).unwrap();

        assert_eq!(agent.spec().model, "gemini-test");
        assert_eq!(agent.spec().instruction, "Only discuss floods.");
        assert_eq!(agent.executor().policy().timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_empty_model_rejected() {
        let settings = AgentSettings {
            model: " ".to_string(),
            ..AgentSettings::default()
        };
        assert!(matches!(
            DisasterAgent::new(&settings),
            Err(AgentError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_handle_static_tool() {
        let mut arguments = HashMap::new();
        arguments.insert("disaster_type".to_string(), Value::from("tornado"));
        arguments.insert("measurement".to_string(), Value::from("EF3"));

        let result = agent()
            .handle(ToolRequest::new("call-1", "analyze_disaster_severity", arguments))
            .await;

        assert!(result.success);
        let body: Value = serde_json::from_str(&result.content).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["measurement"], "EF3");
        assert_eq!(body["severity_analysis"], "Severe damage - 136-165 mph winds");
    }
}
