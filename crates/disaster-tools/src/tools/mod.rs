//! Built-in tool implementations.

mod disaster_summary;
mod earthquakes;
mod emergency_resources;
mod hurricanes;
mod severity;
mod weather_alerts;
mod wildfires;

pub use disaster_summary::DisasterSummary;
pub use earthquakes::{EarthquakeEvent, RecentEarthquakes};
pub use emergency_resources::EmergencyResources;
pub use hurricanes::{ActiveHurricanes, MarkerPhraseInterpreter, StormActivity, StormFeedInterpreter};
pub use severity::SeverityAnalyzer;
pub use weather_alerts::{WeatherAlert, WeatherAlerts};
pub use wildfires::{ActiveWildfires, WILDFIRE_RESOURCES};

use crate::error::ToolError;
use crate::tool::ToolOutput;

/// Structured error result for a failed upstream fetch.
///
/// Non-200 answers keep their status code in the message; everything else
/// carries the error text.
pub(crate) fn fetch_failure(what: &str, error: ToolError) -> ToolOutput {
    match error {
        ToolError::UnexpectedStatus(code) => {
            ToolOutput::error(format!("Could not fetch {}. Status code: {}", what, code))
        }
        other => ToolOutput::error(format!("Error fetching {}: {}", what, other)),
    }
}
