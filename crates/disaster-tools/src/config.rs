//! Configuration for the disaster tools.

use std::env;
use std::time::Duration;

/// Default USGS summary feed directory.
pub const DEFAULT_USGS_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// Default NWS active-alerts endpoint.
pub const DEFAULT_NWS_ALERTS_URL: &str = "https://api.weather.gov/alerts/active";

/// Default NHC Atlantic basin feed.
pub const DEFAULT_NHC_FEED_URL: &str = "https://www.nhc.noaa.gov/index-at.xml";

/// The NWS API rejects requests without an identifying User-Agent.
pub const DEFAULT_USER_AGENT: &str = "(DisasterInfoAgent, contact@example.com)";

/// Default per-request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Configuration shared by the network-backed tools.
#[derive(Debug, Clone, PartialEq)]
pub struct DisasterToolsConfig {
    /// Directory holding the USGS `<mag>_day.geojson` feeds.
    pub usgs_feed_url: String,

    /// NWS active alerts endpoint.
    pub nws_alerts_url: String,

    /// NHC feed URL.
    pub nhc_feed_url: String,

    /// User-Agent sent with every request.
    pub user_agent: String,

    /// Timeout applied to each outbound request.
    pub http_timeout: Duration,
}

impl Default for DisasterToolsConfig {
    fn default() -> Self {
        Self {
            usgs_feed_url: DEFAULT_USGS_FEED_URL.to_string(),
            nws_alerts_url: DEFAULT_NWS_ALERTS_URL.to_string(),
            nhc_feed_url: DEFAULT_NHC_FEED_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl DisasterToolsConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `DISASTER_USGS_FEED_URL` - USGS feed directory
    /// - `DISASTER_NWS_ALERTS_URL` - NWS alerts endpoint
    /// - `DISASTER_NHC_FEED_URL` - NHC feed
    /// - `DISASTER_USER_AGENT` - identifying User-Agent
    /// - `DISASTER_HTTP_TIMEOUT_SECS` - request timeout (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let usgs_feed_url = env::var("DISASTER_USGS_FEED_URL").unwrap_or(defaults.usgs_feed_url);
        let nws_alerts_url =
            env::var("DISASTER_NWS_ALERTS_URL").unwrap_or(defaults.nws_alerts_url);
        let nhc_feed_url = env::var("DISASTER_NHC_FEED_URL").unwrap_or(defaults.nhc_feed_url);
        let user_agent = env::var("DISASTER_USER_AGENT").unwrap_or(defaults.user_agent);

        let http_timeout = env::var("DISASTER_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.http_timeout);

        Self {
            usgs_feed_url,
            nws_alerts_url,
            nhc_feed_url,
            user_agent,
            http_timeout,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> DisasterToolsConfigBuilder {
        DisasterToolsConfigBuilder::default()
    }

    /// Build an HTTP client carrying the configured User-Agent and timeout.
    pub(crate) fn http_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.http_timeout)
            .build()
            .expect("Failed to create HTTP client")
    }
}

/// Builder for DisasterToolsConfig.
#[derive(Debug, Default)]
pub struct DisasterToolsConfigBuilder {
    config: DisasterToolsConfig,
}

impl DisasterToolsConfigBuilder {
    /// Set the USGS feed directory.
    pub fn usgs_feed_url(mut self, url: impl Into<String>) -> Self {
        self.config.usgs_feed_url = url.into();
        self
    }

    /// Set the NWS alerts endpoint.
    pub fn nws_alerts_url(mut self, url: impl Into<String>) -> Self {
        self.config.nws_alerts_url = url.into();
        self
    }

    /// Set the NHC feed URL.
    pub fn nhc_feed_url(mut self, url: impl Into<String>) -> Self {
        self.config.nhc_feed_url = url.into();
        self
    }

    /// Set the User-Agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the request timeout.
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> DisasterToolsConfig {
        self.config
    }
}
