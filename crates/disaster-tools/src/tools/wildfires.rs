//! Wildfire resource pointers.
//!
//! Live fire detections (NASA FIRMS) need a registered map key, so this tool
//! hands back the public incident trackers instead of calling anything.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::ToolError;
use crate::format::now_timestamp;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// External trackers for current wildfire incidents.
pub const WILDFIRE_RESOURCES: &[&str] = &[
    "InciWeb: https://inciweb.nwcg.gov/ - Official incident information",
    "Fire Weather: https://www.spc.noaa.gov/products/fire_wx/ - Fire weather forecasts",
    "CAL FIRE (California): https://www.fire.ca.gov/incidents/",
    "AirNow: https://www.airnow.gov/ - Air quality during wildfires",
];

/// Points users at wildfire incident trackers.
///
/// # Parameters
///
/// - `state` (optional): US state code. Accepted for forward compatibility
///   but not applied; results always carry `state_filter_applied: false`.
#[derive(Debug, Default)]
pub struct ActiveWildfires;

impl ActiveWildfires {
    /// Create a new wildfire tool.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for ActiveWildfires {
    fn name(&self) -> &str {
        "get_active_wildfires"
    }

    fn description(&self) -> &str {
        "Get information about active wildfires: links to official incident trackers, \
         fire weather forecasts and air quality."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "state": {
                    "type": "string",
                    "description": "Optional US state code (e.g., 'CA', 'TX'); currently not used for filtering"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        if let Some(state) = args.get_string_opt("state") {
            debug!("Wildfire state filter '{}' is not applied", state);
        }

        Ok(ToolOutput::success()
            .with("message", "For real-time wildfire information, visit:")
            .with("resources", WILDFIRE_RESOURCES.to_vec())
            .with(
                "note",
                "Active wildfire data requires API access. Check the resources above for current incidents.",
            )
            .with("state_filter_applied", false)
            .with("timestamp", now_timestamp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_resource_links() {
        let output = ActiveWildfires::new()
            .execute(ToolArgs::default())
            .await
            .unwrap();

        assert!(output.is_success());
        let resources = output.get("resources").and_then(|v| v.as_array()).unwrap();
        assert_eq!(resources.len(), 4);
        assert!(resources[0].as_str().unwrap().contains("inciweb.nwcg.gov"));
        assert_eq!(output.text(), "For real-time wildfire information, visit:");
    }

    #[tokio::test]
    async fn test_state_is_accepted_but_not_applied() {
        let args = ToolArgs::from_json(r#"{"state": "CA"}"#).unwrap();
        let output = ActiveWildfires::new().execute(args).await.unwrap();

        assert!(output.is_success());
        assert_eq!(output.get("state_filter_applied"), Some(&Value::Bool(false)));
        assert_eq!(output.get("resources").and_then(|v| v.as_array()).map(|r| r.len()), Some(4));
    }
}
