//! Disaster summary lookup from the static reference table.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::data::{find_disaster, supported_disasters, DisasterRecord};
use crate::error::ToolError;
use crate::format::title_case;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Returns a description, safety tips, severity scale and typical season
/// for a disaster type.
///
/// # Parameters
///
/// - `disaster_type` (required): hurricane, earthquake, flood, wildfire,
///   tornado, tsunami or blizzard (any letter case).
/// - `location` (optional): Shown in the heading, e.g. "Hurricane in Miami".
///
/// # Examples
///
/// ```json
/// {"disaster_type": "hurricane"}
/// {"disaster_type": "Flood", "location": "Houston"}
/// ```
#[derive(Debug, Default)]
pub struct DisasterSummary;

impl DisasterSummary {
    /// Create a new disaster summary tool.
    pub fn new() -> Self {
        Self
    }

    /// Pure lookup used by `execute`.
    pub fn summarize(disaster_type: &str, location: Option<&str>) -> ToolOutput {
        let key = disaster_type.to_lowercase();

        match find_disaster(&key) {
            Some(record) => ToolOutput::success()
                .with("disaster_type", record.key)
                .with("location", location.map(|l| Value::String(l.to_string())))
                .with("summary", Self::format_record(record, location)),
            None => ToolOutput::error(format!(
                "I don't have information about '{}'. Try: {}.",
                key,
                Self::supported_list()
            )),
        }
    }

    /// Supported types as prose: "a, b, or c".
    fn supported_list() -> String {
        match supported_disasters().split_last() {
            Some((last, [])) => last.to_string(),
            Some((last, rest)) => format!("{}, or {}", rest.join(", "), last),
            None => String::new(),
        }
    }

    fn format_record(record: &DisasterRecord, location: Option<&str>) -> String {
        let location_text = location.map(|l| format!(" in {}", l)).unwrap_or_default();

        format!(
            "**{}{}**\n\n\
             **Description:** {}\n\n\
             **Safety Tips:** {}\n\n\
             **Severity Scale:** {}\n\n\
             **Typical Season:** {}",
            title_case(record.key),
            location_text,
            record.description,
            record.safety_tips,
            record.severity_scale,
            record.typical_season
        )
    }
}

#[async_trait]
impl Tool for DisasterSummary {
    fn name(&self) -> &str {
        "get_disaster_summary"
    }

    fn description(&self) -> &str {
        "Get a summary of a specific type of natural disaster: description, safety tips, \
         severity scale and typical season."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "disaster_type": {
                    "type": "string",
                    "description": "Type of disaster (e.g., hurricane, earthquake, flood, wildfire, tornado, tsunami, blizzard)"
                },
                "location": {
                    "type": "string",
                    "description": "Optional location to mention in the summary"
                }
            },
            "required": ["disaster_type"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let disaster_type = args.get_string("disaster_type")?;
        let location = args.get_string_opt("location");

        debug!("Summarizing disaster type '{}'", disaster_type);

        Ok(Self::summarize(&disaster_type, location.as_deref()))
    }
}
