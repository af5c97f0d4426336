//! Recent earthquakes from the USGS summary feeds.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::DisasterToolsConfig;
use crate::error::ToolError;
use crate::format::{magnitude_label, now_timestamp, utc_from_millis};
use crate::tool::{Tool, ToolArgs, ToolOutput};
use crate::tools::fetch_failure;

const DEFAULT_MIN_MAGNITUDE: f64 = 4.5;
/// Events returned structurally.
const MAX_EVENTS: usize = 10;
/// Events spelled out in the summary text.
const SUMMARY_EVENTS: usize = 5;
const SOURCE: &str = "USGS Earthquake Hazards Program";

#[derive(Debug, Deserialize)]
struct QuakeCollection {
    #[serde(default)]
    features: Vec<QuakeFeature>,
}

#[derive(Debug, Deserialize)]
struct QuakeFeature {
    #[serde(default)]
    properties: QuakeProperties,
    geometry: Option<PointGeometry>,
}

#[derive(Debug, Default, Deserialize)]
struct QuakeProperties {
    mag: Option<f64>,
    place: Option<String>,
    /// Epoch milliseconds.
    time: Option<i64>,
    url: Option<String>,
}

/// GeoJSON point: `[longitude, latitude, depth_km]`.
#[derive(Debug, Deserialize)]
struct PointGeometry {
    #[serde(default)]
    coordinates: Vec<f64>,
}

/// One earthquake as reported to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthquakeEvent {
    pub magnitude: Option<f64>,
    /// Human-readable place, e.g. "10 km SSW of Ridgecrest, CA".
    pub location: Option<String>,
    /// `YYYY-MM-DD HH:MM:SS UTC`.
    pub time: Option<String>,
    pub depth_km: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub url: Option<String>,
}

impl From<&QuakeFeature> for EarthquakeEvent {
    fn from(feature: &QuakeFeature) -> Self {
        let coords = feature
            .geometry
            .as_ref()
            .map(|g| g.coordinates.as_slice())
            .unwrap_or_default();

        Self {
            magnitude: feature.properties.mag,
            location: feature.properties.place.clone(),
            time: feature.properties.time.and_then(utc_from_millis),
            depth_km: coords.get(2).copied(),
            latitude: coords.get(1).copied(),
            longitude: coords.first().copied(),
            url: feature.properties.url.clone(),
        }
    }
}

/// Earthquakes from the last 24 hours at or above a magnitude threshold.
///
/// # Parameters
///
/// - `min_magnitude` (optional, default 4.5): USGS publishes feeds for
///   1.0, 2.5 and 4.5.
///
/// # Examples
///
/// ```json
/// {}
/// {"min_magnitude": 2.5}
/// ```
pub struct RecentEarthquakes {
    client: reqwest::Client,
    feed_url: String,
}

impl RecentEarthquakes {
    /// Create a new earthquake tool against the public USGS feeds.
    pub fn new() -> Self {
        Self::with_config(&DisasterToolsConfig::default())
    }

    /// Create an earthquake tool from configuration.
    pub fn with_config(config: &DisasterToolsConfig) -> Self {
        Self {
            client: config.http_client(),
            feed_url: config.usgs_feed_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the day feed for a magnitude threshold.
    async fn fetch_features(&self, magnitude: &str) -> Result<Vec<QuakeFeature>, ToolError> {
        let url = format!("{}/{}_day.geojson", self.feed_url, magnitude);

        debug!("Fetching earthquakes from: {}", url);

        let response = self.client.get(&url).send().await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(ToolError::UnexpectedStatus(response.status().as_u16()));
        }

        let collection: QuakeCollection = response.json().await?;
        Ok(collection.features)
    }

    fn build_output(features: &[QuakeFeature], magnitude: &str) -> Result<ToolOutput, ToolError> {
        if features.is_empty() {
            return Ok(ToolOutput::success()
                .with("count", 0)
                .with(
                    "message",
                    format!(
                        "No earthquakes of magnitude {} or greater in the last 24 hours.",
                        magnitude
                    ),
                )
                .with("source", SOURCE)
                .with("timestamp", now_timestamp()));
        }

        let events: Vec<EarthquakeEvent> = features
            .iter()
            .take(MAX_EVENTS)
            .map(EarthquakeEvent::from)
            .collect();

        let summary = Self::format_summary(&events, features.len(), magnitude);

        ToolOutput::success()
            .with("count", features.len())
            .with_serialized("earthquakes", &events)
            .map(|output| {
                output
                    .with("summary", summary)
                    .with("source", SOURCE)
                    .with("timestamp", now_timestamp())
            })
    }

    fn format_summary(events: &[EarthquakeEvent], total: usize, magnitude: &str) -> String {
        let mut summary = format!(
            "**Recent Earthquakes (Magnitude {}+)**\n\nFound {} earthquake(s) in the last 24 hours.\n\n",
            magnitude, total
        );

        for (i, event) in events.iter().take(SUMMARY_EVENTS).enumerate() {
            let mag = event
                .magnitude
                .map(magnitude_label)
                .unwrap_or_else(|| "?".to_string());
            let depth = event
                .depth_km
                .map(|d| format!("{:.1} km", d))
                .unwrap_or_else(|| "unknown".to_string());

            summary.push_str(&format!(
                "{}. **M{}** - {}\n   Time: {}\n   Depth: {}\n\n",
                i + 1,
                mag,
                event.location.as_deref().unwrap_or("Unknown location"),
                event.time.as_deref().unwrap_or("unknown"),
                depth
            ));
        }

        summary
    }
}

impl Default for RecentEarthquakes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for RecentEarthquakes {
    fn name(&self) -> &str {
        "get_recent_earthquakes"
    }

    fn description(&self) -> &str {
        "Get real-time earthquake data from USGS for the last 24 hours, \
         filtered by minimum magnitude."
    }

    fn parameters(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "min_magnitude": {
                    "type": "number",
                    "description": "Minimum earthquake magnitude to report (default 4.5)"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let min_magnitude = args
            .get_number_opt("min_magnitude")?
            .unwrap_or(DEFAULT_MIN_MAGNITUDE);

        if !min_magnitude.is_finite() || min_magnitude < 0.0 {
            return Err(ToolError::InvalidParameter {
                name: "min_magnitude".to_string(),
                reason: "must be a non-negative number".to_string(),
            });
        }

        let magnitude = magnitude_label(min_magnitude);

        let result = self
            .fetch_features(&magnitude)
            .await
            .and_then(|features| Self::build_output(&features, &magnitude));

        Ok(result.unwrap_or_else(|e| {
            warn!("Earthquake fetch failed: {}", e);
            fetch_failure("earthquake data", e)
        }))
    }
}
