//! Active tropical cyclones from the National Hurricane Center feed.
//!
//! The feed is not parsed structurally. Deciding whether it reports any
//! storms is delegated to a [`StormFeedInterpreter`], so the default
//! substring heuristic can be swapped for a real XML parser without
//! touching the tool.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::DisasterToolsConfig;
use crate::error::ToolError;
use crate::format::{now_timestamp, truncate_chars};
use crate::tool::{Tool, ToolArgs, ToolOutput};
use crate::tools::fetch_failure;

const SOURCE: &str = "NOAA National Hurricane Center";
const NHC_HOME: &str = "https://www.nhc.noaa.gov";

/// What a feed says about current storm activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StormActivity {
    /// No active tropical cyclones.
    Quiet,
    /// Something is active; `excerpt` is a short raw slice for the user.
    Active { excerpt: String },
}

/// Turns the raw NHC feed body into a [`StormActivity`].
pub trait StormFeedInterpreter: Send + Sync {
    fn interpret(&self, feed: &str) -> StormActivity;
}

/// Default heuristic: quiet if the "no tropical cyclones" phrase is present
/// or the body is too short to contain any advisory.
#[derive(Debug, Clone)]
pub struct MarkerPhraseInterpreter {
    pub quiet_marker: String,
    /// Bodies shorter than this (in characters) count as quiet.
    pub min_active_len: usize,
    /// Characters kept in the excerpt.
    pub excerpt_len: usize,
}

impl Default for MarkerPhraseInterpreter {
    fn default() -> Self {
        Self {
            quiet_marker: "There are no tropical cyclones at this time".to_string(),
            min_active_len: 500,
            excerpt_len: 500,
        }
    }
}

impl StormFeedInterpreter for MarkerPhraseInterpreter {
    fn interpret(&self, feed: &str) -> StormActivity {
        if feed.contains(&self.quiet_marker) || feed.chars().count() < self.min_active_len {
            return StormActivity::Quiet;
        }
        StormActivity::Active {
            excerpt: format!("{}...", truncate_chars(feed, self.excerpt_len)),
        }
    }
}

/// Reports whether the NHC currently tracks any Atlantic storms.
///
/// Takes no parameters.
pub struct ActiveHurricanes {
    client: reqwest::Client,
    feed_url: String,
    interpreter: Arc<dyn StormFeedInterpreter>,
}

impl ActiveHurricanes {
    /// Create a new hurricane tool against the public NHC feed.
    pub fn new() -> Self {
        Self::with_config(&DisasterToolsConfig::default())
    }

    /// Create a hurricane tool from configuration.
    pub fn with_config(config: &DisasterToolsConfig) -> Self {
        Self {
            client: config.http_client(),
            feed_url: config.nhc_feed_url.clone(),
            interpreter: Arc::new(MarkerPhraseInterpreter::default()),
        }
    }

    /// Replace the feed interpreter.
    pub fn with_interpreter(mut self, interpreter: Arc<dyn StormFeedInterpreter>) -> Self {
        self.interpreter = interpreter;
        self
    }

    async fn fetch_feed(&self) -> Result<String, ToolError> {
        debug!("Fetching hurricane feed from: {}", self.feed_url);

        let response = self.client.get(&self.feed_url).send().await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(ToolError::UnexpectedStatus(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }

    fn build_output(activity: StormActivity) -> ToolOutput {
        match activity {
            StormActivity::Quiet => ToolOutput::success()
                .with("active_storms", 0)
                .with(
                    "message",
                    "There are currently no active tropical cyclones in the Atlantic basin.",
                )
                .with("source", SOURCE)
                .with("timestamp", now_timestamp()),
            StormActivity::Active { excerpt } => ToolOutput::success()
                .with(
                    "message",
                    format!(
                        "Active tropical weather detected. Check {} for latest updates.",
                        NHC_HOME
                    ),
                )
                .with("data", excerpt)
                .with("source", SOURCE)
                .with("timestamp", now_timestamp())
                .with("url", NHC_HOME),
        }
    }
}

impl Default for ActiveHurricanes {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for ActiveHurricanes {
    fn name(&self) -> &str {
        "get_active_hurricanes"
    }

    fn description(&self) -> &str {
        "Get real-time information about active hurricanes and tropical storms \
         from NOAA's National Hurricane Center."
    }

    async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let output = match self.fetch_feed().await {
            Ok(feed) => Self::build_output(self.interpreter.interpret(&feed)),
            Err(e) => {
                warn!("Hurricane feed fetch failed: {}", e);
                fetch_failure("hurricane data", e)
            }
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tool_for(server: &MockServer) -> ActiveHurricanes {
        let config = DisasterToolsConfig::builder()
            .nhc_feed_url(format!("{}/index-at.xml", server.uri()))
            .build();
        ActiveHurricanes::with_config(&config)
    }

    fn long_feed(marker: &str) -> String {
        format!(
            "<?xml version=\"1.0\"?><rss><channel>{}{}</channel></rss>",
            marker,
            "<item>Advisory text</item>".repeat(60)
        )
    }

    #[test]
    fn test_interpreter_marker_phrase() {
        let interpreter = MarkerPhraseInterpreter::default();
        let feed = long_feed("There are no tropical cyclones at this time.");
        assert_eq!(interpreter.interpret(&feed), StormActivity::Quiet);
    }

    #[test]
    fn test_interpreter_short_body_is_quiet() {
        let interpreter = MarkerPhraseInterpreter::default();
        assert_eq!(interpreter.interpret("<rss/>"), StormActivity::Quiet);
    }

    #[test]
    fn test_interpreter_excerpt() {
        let interpreter = MarkerPhraseInterpreter::default();
        let feed = long_feed("<title>Hurricane Example</title>");
        match interpreter.interpret(&feed) {
            StormActivity::Active { excerpt } => {
                assert_eq!(excerpt.chars().count(), 503);
                assert!(excerpt.ends_with("..."));
                assert!(excerpt.contains("Hurricane Example"));
            }
            other => panic!("expected activity, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_quiet_feed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/index-at.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(long_feed(
                "There are no tropical cyclones at this time.",
            )))
            .mount(&server)
            .await;

        let output = tool_for(&server).execute(ToolArgs::default()).await.unwrap();

        assert!(output.is_success());
        assert_eq!(output.get("active_storms"), Some(&json!(0)));
        assert_eq!(output.get_str("source"), Some("NOAA National Hurricane Center"));
        assert!(output.get("data").is_none());
    }

    #[tokio::test]
    async fn test_active_feed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/index-at.xml"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(long_feed("<title>Hurricane</title>")),
            )
            .mount(&server)
            .await;

        let output = tool_for(&server).execute(ToolArgs::default()).await.unwrap();

        assert!(output.is_success());
        assert!(output.get("active_storms").is_none());
        assert_eq!(output.get_str("url"), Some("https://www.nhc.noaa.gov"));
        assert!(output.get_str("data").unwrap().ends_with("..."));
    }

    #[tokio::test]
    async fn test_custom_interpreter() {
        struct AlwaysActive;
        impl StormFeedInterpreter for AlwaysActive {
            fn interpret(&self, _feed: &str) -> StormActivity {
                StormActivity::Active {
                    excerpt: "custom".to_string(),
                }
            }
        }

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<rss/>"))
            .mount(&server)
            .await;

        let output = tool_for(&server)
            .with_interpreter(Arc::new(AlwaysActive))
            .execute(ToolArgs::default())
            .await
            .unwrap();
        assert_eq!(output.get_str("data"), Some("custom"));
    }

    #[tokio::test]
    async fn test_non_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let output = tool_for(&server).execute(ToolArgs::default()).await.unwrap();
        assert_eq!(
            output.error_message(),
            Some("Could not fetch hurricane data. Status code: 404")
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_structured_error() {
        let config = DisasterToolsConfig::builder()
            .nhc_feed_url("http://127.0.0.1:9/index-at.xml")
            .http_timeout(std::time::Duration::from_secs(2))
            .build();
        let output = ActiveHurricanes::with_config(&config)
            .execute(ToolArgs::default())
            .await
            .unwrap();

        assert!(!output.is_success());
        assert!(output
            .error_message()
            .unwrap()
            .starts_with("Error fetching hurricane data:"));
    }
}
