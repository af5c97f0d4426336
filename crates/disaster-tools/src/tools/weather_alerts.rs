//! Active weather alerts from the National Weather Service API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DisasterToolsConfig;
use crate::error::ToolError;
use crate::format::{now_timestamp, truncate_chars};
use crate::tool::{Tool, ToolArgs, ToolOutput};
use crate::tools::fetch_failure;

/// Alerts returned structurally.
const MAX_ALERTS: usize = 15;
/// Alerts spelled out in the summary text.
const SUMMARY_ALERTS: usize = 10;
const DESCRIPTION_CHARS: usize = 200;
const SOURCE: &str = "NOAA National Weather Service";

#[derive(Debug, Deserialize)]
struct AlertCollection {
    #[serde(default)]
    features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
struct AlertFeature {
    #[serde(default)]
    properties: AlertProperties,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AlertProperties {
    event: Option<String>,
    severity: Option<String>,
    urgency: Option<String>,
    area_desc: Option<String>,
    headline: Option<String>,
    description: Option<String>,
    onset: Option<String>,
    expires: Option<String>,
}

/// One active alert as reported to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAlert {
    pub event: Option<String>,
    pub severity: Option<String>,
    pub urgency: Option<String>,
    pub areas: Option<String>,
    pub headline: Option<String>,
    /// First 200 characters followed by `...`.
    pub description: String,
    pub onset: Option<String>,
    pub expires: Option<String>,
}

impl From<&AlertFeature> for WeatherAlert {
    fn from(feature: &AlertFeature) -> Self {
        let props = &feature.properties;
        let description = props.description.as_deref().unwrap_or_default();

        Self {
            event: props.event.clone(),
            severity: props.severity.clone(),
            urgency: props.urgency.clone(),
            areas: props.area_desc.clone(),
            headline: props.headline.clone(),
            description: format!("{}...", truncate_chars(description, DESCRIPTION_CHARS)),
            onset: props.onset.clone(),
            expires: props.expires.clone(),
        }
    }
}

/// Active NWS alerts, nationally or for one state.
///
/// The NWS API refuses anonymous requests, so every call carries the
/// configured User-Agent.
///
/// # Parameters
///
/// - `state` (optional): Two-letter state or marine area code (e.g. "TX", "FL").
///
/// # Examples
///
/// ```json
/// {}
/// {"state": "fl"}
/// ```
pub struct WeatherAlerts {
    client: reqwest::Client,
    alerts_url: String,
}

impl WeatherAlerts {
    /// Create a new weather alerts tool against api.weather.gov.
    pub fn new() -> Self {
        Self::with_config(&DisasterToolsConfig::default())
    }

    /// Create a weather alerts tool from configuration.
    pub fn with_config(config: &DisasterToolsConfig) -> Self {
        Self {
            client: config.http_client(),
            alerts_url: config.nws_alerts_url.clone(),
        }
    }

    async fn fetch_alerts(&self, area: Option<&str>) -> Result<Vec<AlertFeature>, ToolError> {
        let mut request = self.client.get(&self.alerts_url);
        if let Some(area) = area {
            request = request.query(&[("area", area)]);
        }

        debug!("Fetching weather alerts from {} (area: {:?})", self.alerts_url, area);

        let response = request.send().await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(ToolError::UnexpectedStatus(response.status().as_u16()));
        }

        let collection: AlertCollection = response.json().await?;
        Ok(collection.features)
    }

    fn build_output(features: &[AlertFeature], area: Option<&str>) -> Result<ToolOutput, ToolError> {
        if features.is_empty() {
            let location_text = match area {
                Some(area) => format!(" in {}", area),
                None => " in the United States".to_string(),
            };
            return Ok(ToolOutput::success()
                .with("count", 0)
                .with("message", format!("No active weather alerts{}.", location_text))
                .with("source", SOURCE)
                .with("timestamp", now_timestamp()));
        }

        let alerts: Vec<WeatherAlert> = features
            .iter()
            .take(MAX_ALERTS)
            .map(WeatherAlert::from)
            .collect();

        let summary = Self::format_summary(&alerts, features.len());

        Ok(ToolOutput::success()
            .with("count", features.len())
            .with_serialized("alerts", &alerts)?
            .with("summary", summary)
            .with("source", SOURCE)
            .with("timestamp", now_timestamp()))
    }

    fn format_summary(alerts: &[WeatherAlert], total: usize) -> String {
        let mut summary = format!(
            "**Active Weather Alerts**\n\nFound {} active alert(s).\n\n",
            total
        );

        for (i, alert) in alerts.iter().take(SUMMARY_ALERTS).enumerate() {
            summary.push_str(&format!(
                "{}. **{}** ({})\n   Areas: {}\n",
                i + 1,
                alert.event.as_deref().unwrap_or("Unknown event"),
                alert.severity.as_deref().unwrap_or("Unknown"),
                alert.areas.as_deref().unwrap_or("Unspecified")
            ));
            if let Some(headline) = alert.headline.as_deref().filter(|h| !h.is_empty()) {
                summary.push_str(&format!("   {}\n", headline));
            }
            summary.push('\n');
        }

        summary
    }
}

impl Default for WeatherAlerts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for WeatherAlerts {
    fn name(&self) -> &str {
        "get_weather_alerts"
    }

    fn description(&self) -> &str {
        "Get current weather alerts and warnings from the NOAA National Weather Service, \
         optionally for a single US state."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "state": {
                    "type": "string",
                    "description": "Optional US state code (e.g., 'TX', 'FL')"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let area = args.get_string_opt("state").map(|s| s.trim().to_uppercase());

        let result = self
            .fetch_alerts(area.as_deref())
            .await
            .and_then(|features| Self::build_output(&features, area.as_deref()));

        Ok(result.unwrap_or_else(|e| {
            warn!("Weather alert fetch failed: {}", e);
            fetch_failure("weather alerts", e)
        }))
    }
}
