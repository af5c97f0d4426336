//! Severity analysis against the static scales.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::data::find_severity_table;
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Maps a measurement such as "CAT 4", "EF3" or "7.0-7.9" to a severity
/// description.
///
/// Matching is loose: the first level whose label contains the measurement,
/// or is contained in it, wins. When nothing matches the whole scale is
/// returned instead of an error so the model can still reason about it.
///
/// # Parameters
///
/// - `disaster_type` (required): hurricane, earthquake or tornado.
/// - `measurement` (required): Measurement text.
#[derive(Debug, Default)]
pub struct SeverityAnalyzer;

impl SeverityAnalyzer {
    /// Create a new severity analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Pure analysis used by `execute`.
    pub fn analyze(disaster_type: &str, measurement: &str) -> ToolOutput {
        let disaster_type = disaster_type.to_lowercase();
        let measurement = measurement.to_uppercase();

        let Some(table) = find_severity_table(&disaster_type) else {
            return ToolOutput::error(format!(
                "I don't have severity analysis for '{}'.",
                disaster_type
            ));
        };

        match table.match_level(&measurement) {
            Some((label, description)) => {
                debug!("Measurement '{}' matched level '{}'", measurement, label);
                ToolOutput::success()
                    .with("disaster_type", disaster_type)
                    .with("measurement", measurement)
                    .with("severity_analysis", description)
            }
            None => ToolOutput::success()
                .with("disaster_type", disaster_type)
                .with("severity_levels", table.listing()),
        }
    }
}

#[async_trait]
impl Tool for SeverityAnalyzer {
    fn name(&self) -> &str {
        "analyze_disaster_severity"
    }

    fn description(&self) -> &str {
        "Analyze the severity of a disaster from a measurement \
         (e.g., \"CAT 4\" hurricane, \"7.0\" earthquake, \"EF3\" tornado)."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "disaster_type": {
                    "type": "string",
                    "description": "Type of disaster: hurricane, earthquake or tornado"
                },
                "measurement": {
                    "type": "string",
                    "description": "Measurement value (e.g., \"CAT 4\", \"7.0\", \"EF3\")"
                }
            },
            "required": ["disaster_type", "measurement"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let disaster_type = args.get_string("disaster_type")?;
        let measurement = args.get_string("measurement")?;

        Ok(Self::analyze(&disaster_type, &measurement))
    }
}
