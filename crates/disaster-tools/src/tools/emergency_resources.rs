//! Emergency contact directory tool.

use async_trait::async_trait;
use serde_json::Value;

use crate::data::{contacts_for, GENERAL_CONTACTS};
use crate::error::ToolError;
use crate::format::title_case;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Lists general emergency contacts, plus type-specific ones when a known
/// disaster type is given.
///
/// # Parameters
///
/// - `disaster_type` (optional): hurricane, earthquake, wildfire or flood
///   add a specific block; anything else is ignored.
#[derive(Debug, Default)]
pub struct EmergencyResources;

impl EmergencyResources {
    /// Create a new emergency resources tool.
    pub fn new() -> Self {
        Self
    }

    /// Pure composition used by `execute`.
    pub fn compose(disaster_type: Option<&str>) -> ToolOutput {
        let mut text = String::from("**Emergency Resources**\n\n**General Emergency Contacts:**\n");
        push_contacts(&mut text, GENERAL_CONTACTS);

        if let Some(disaster_type) = disaster_type.map(str::trim) {
            if let Some(contacts) = contacts_for(disaster_type) {
                text.push_str(&format!(
                    "\n**{}-Specific Resources:**\n",
                    title_case(disaster_type)
                ));
                push_contacts(&mut text, contacts);
            }
        }

        ToolOutput::success().with("resources", text)
    }
}

fn push_contacts(text: &mut String, contacts: &[(&str, &str)]) {
    for (label, value) in contacts {
        text.push_str(&format!("• {}: {}\n", label, value));
    }
}

#[async_trait]
impl Tool for EmergencyResources {
    fn name(&self) -> &str {
        "get_emergency_resources"
    }

    fn description(&self) -> &str {
        "Get emergency resources and contact information, optionally including \
         contacts specific to a disaster type."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "disaster_type": {
                    "type": "string",
                    "description": "Optional disaster type to get specific resources"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let disaster_type = args.get_string_opt("disaster_type");
        Ok(Self::compose(disaster_type.as_deref()))
    }
}
