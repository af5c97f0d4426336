//! Natural-disaster information tools for a conversational agent.
//!
//! Each tool answers one kind of question and returns a structured
//! [`ToolOutput`] with a `status` of `success` or `error`. Upstream failures
//! (network errors, non-200 answers, malformed bodies) come back as error
//! results, never as panics, so the model can always phrase a reply.
//!
//! # Tools
//!
//! ## Static references
//! - [`DisasterSummary`] - Overview, safety tips, severity scale and season for a disaster type.
//! - [`EmergencyResources`] - National contacts, plus type-specific ones when known.
//! - [`SeverityAnalyzer`] - Map a measurement (e.g. "EF3", "7.2") onto a severity scale.
//! - [`ActiveWildfires`] - Links to authoritative wildfire trackers.
//!
//! ## Live feeds
//! - [`ActiveHurricanes`] - NOAA National Hurricane Center Atlantic feed.
//! - [`RecentEarthquakes`] - USGS past-day GeoJSON summary feed.
//! - [`WeatherAlerts`] - NOAA National Weather Service active alerts.
//!
//! The registry can be exposed to an agent runtime through
//! [`RegistryToolExecutor`], which implements [`agent_core::ToolExecutor`].
//!
//! # Example
//!
//! ```rust,ignore
//! use disaster_tools::default_registry;
//! use std::collections::HashMap;
//! use serde_json::Value;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = default_registry();
//!
//!     let mut params = HashMap::new();
//!     params.insert("disaster_type".to_string(), Value::String("tornado".to_string()));
//!     params.insert("measurement".to_string(), Value::String("EF3".to_string()));
//!
//!     let result = registry.execute("analyze_disaster_severity", params).await.unwrap();
//!     println!("{}", result.text());
//! }
//! ```

mod config;
pub mod data;
mod error;
mod executor;
mod format;
mod registry;
mod tool;
pub mod tools;

pub use config::{
    DisasterToolsConfig, DisasterToolsConfigBuilder, DEFAULT_HTTP_TIMEOUT_SECS,
    DEFAULT_NHC_FEED_URL, DEFAULT_NWS_ALERTS_URL, DEFAULT_USER_AGENT, DEFAULT_USGS_FEED_URL,
};
pub use error::ToolError;
pub use executor::{RegistryToolExecutor, ToolPolicy};
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolOutput, ToolStatus};
pub use tools::{
    ActiveHurricanes, ActiveWildfires, DisasterSummary, EarthquakeEvent, EmergencyResources,
    MarkerPhraseInterpreter, RecentEarthquakes, SeverityAnalyzer, StormActivity,
    StormFeedInterpreter, WeatherAlert, WeatherAlerts,
};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// Create a registry with every built-in tool, configured from the environment.
pub fn default_registry() -> ToolRegistry {
    registry_with_config(&DisasterToolsConfig::from_env())
}

/// Create a registry with every built-in tool using explicit configuration.
pub fn registry_with_config(config: &DisasterToolsConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    // Static references
    registry.register(DisasterSummary::new());
    registry.register(EmergencyResources::new());
    registry.register(SeverityAnalyzer::new());

    // Live feeds
    registry.register(ActiveHurricanes::with_config(config));
    registry.register(RecentEarthquakes::with_config(config));
    registry.register(ActiveWildfires::new());
    registry.register(WeatherAlerts::with_config(config));

    registry
}
