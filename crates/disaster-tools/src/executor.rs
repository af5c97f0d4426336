//! ToolExecutor implementation backed by ToolRegistry.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use agent_core::{ToolDefinition, ToolExecutor, ToolRequest, ToolResult};
use serde_json::Value;
use tokio::time::timeout;
use tracing::warn;

use crate::{ToolOutput, ToolRegistry};

/// Controls what the executor lets through and how results are rendered.
#[derive(Debug, Clone)]
pub struct ToolPolicy {
    /// When set, only these tools may run.
    pub allowlist: Option<HashSet<String>>,
    /// Overall deadline for one tool call, on top of the HTTP timeout.
    pub timeout: Option<Duration>,
    /// Send the full structured result as JSON instead of its text rendering.
    pub format_results_as_json: bool,
}

impl Default for ToolPolicy {
    fn default() -> Self {
        Self {
            allowlist: None,
            timeout: None,
            format_results_as_json: true,
        }
    }
}

impl ToolPolicy {
    pub fn allow_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowlist = self.allowlist.get_or_insert_with(HashSet::new);
        for tool in tools {
            allowlist.insert(tool.into());
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_json_results(mut self, enabled: bool) -> Self {
        self.format_results_as_json = enabled;
        self
    }
}

pub struct RegistryToolExecutor {
    registry: Arc<ToolRegistry>,
    policy: ToolPolicy,
}

impl RegistryToolExecutor {
    pub fn new(registry: ToolRegistry) -> Self {
        Self::with_policy(registry, ToolPolicy::default())
    }

    pub fn with_policy(registry: ToolRegistry, policy: ToolPolicy) -> Self {
        Self::from_shared(Arc::new(registry), policy)
    }

    pub fn from_shared(registry: Arc<ToolRegistry>, policy: ToolPolicy) -> Self {
        Self { registry, policy }
    }

    pub fn registry(&self) -> &ToolRegistry {
        self.registry.as_ref()
    }

    pub fn policy(&self) -> &ToolPolicy {
        &self.policy
    }

    fn is_allowed(&self, tool: &str) -> bool {
        match self.policy.allowlist {
            Some(ref allowlist) => allowlist.contains(tool),
            None => true,
        }
    }

    /// Invoke through the registry under the policy deadline.
    async fn run(&self, name: &str, arguments: HashMap<String, Value>) -> ToolOutput {
        let invoke_future = self.registry.invoke(name, arguments);

        match self.policy.timeout {
            Some(timeout_duration) => match timeout(timeout_duration, invoke_future).await {
                Ok(output) => output,
                Err(_) => {
                    warn!("Tool '{}' timed out after {:?}", name, timeout_duration);
                    ToolOutput::error("Tool execution timed out")
                }
            },
            None => invoke_future.await,
        }
    }

    fn format_result(&self, output: &ToolOutput) -> String {
        if self.policy.format_results_as_json {
            output.to_json_string()
        } else {
            output.text()
        }
    }
}

#[async_trait::async_trait]
impl ToolExecutor for RegistryToolExecutor {
    async fn execute(&self, request: ToolRequest) -> ToolResult {
        let output = if !self.is_allowed(&request.name) {
            warn!("Tool '{}' is not on the allowlist", request.name);
            ToolOutput::error(format!("Tool '{}' is not allowed", request.name))
        } else {
            self.run(&request.name, request.arguments).await
        };

        let formatted = self.format_result(&output);
        if output.is_success() {
            ToolResult::success(request.id, formatted)
        } else {
            ToolResult::failure(request.id, formatted)
        }
    }

    fn supported_tools(&self) -> Vec<&str> {
        match self.policy.allowlist {
            Some(ref allowlist) => self
                .registry
                .list_tools()
                .into_iter()
                .filter(|name| allowlist.contains(*name))
                .collect(),
            None => self.registry.list_tools(),
        }
    }

    fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry
            .definitions()
            .into_iter()
            .filter(|d| self.is_allowed(d.name()))
            .collect()
    }
}
