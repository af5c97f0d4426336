//! Drives the full tool registry against mocked upstream feeds.

use std::collections::HashMap;
use std::time::Duration;

use agent_core::{ToolExecutor, ToolRequest};
use disaster_tools::{registry_with_config, DisasterToolsConfig, RegistryToolExecutor, ToolRegistry};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DISASTER_TYPES: [&str; 7] = [
    "hurricane",
    "earthquake",
    "wildfire",
    "flood",
    "tornado",
    "tsunami",
    "blizzard",
];

fn config_for(server: &MockServer) -> DisasterToolsConfig {
    DisasterToolsConfig::builder()
        .usgs_feed_url(format!("{}/summary", server.uri()))
        .nws_alerts_url(format!("{}/alerts/active", server.uri()))
        .nhc_feed_url(format!("{}/index-at.xml", server.uri()))
        .user_agent("DisasterInfoAgentTest/1.0")
        .http_timeout(Duration::from_secs(5))
        .build()
}

async fn registry_for(server: &MockServer) -> ToolRegistry {
    registry_with_config(&config_for(server))
}

fn params(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn quake(i: usize) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "mag": 5.0 + (i as f64) / 10.0,
            "place": format!("{} km N of Somewhere", i),
            "time": 1_700_000_000_000i64,
            "url": format!("https://earthquake.usgs.gov/earthquakes/eventpage/ev{}", i)
        },
        "geometry": {"type": "Point", "coordinates": [-120.0, 35.0, 10.0]}
    })
}

#[tokio::test]
async fn test_registry_exposes_all_tools_in_order() {
    let server = MockServer::start().await;
    let registry = registry_for(&server).await;

    assert_eq!(
        registry.list_tools(),
        vec![
            "get_disaster_summary",
            "get_emergency_resources",
            "analyze_disaster_severity",
            "get_active_hurricanes",
            "get_recent_earthquakes",
            "get_active_wildfires",
            "get_weather_alerts",
        ]
    );

    for definition in registry.definitions() {
        assert_eq!(definition.tool_type, "function");
        assert!(definition.function.description.is_some());
        assert_eq!(definition.function.parameters["type"], "object");
    }
}

#[tokio::test]
async fn test_every_supported_disaster_has_a_summary() {
    let server = MockServer::start().await;
    let registry = registry_for(&server).await;

    for disaster in DISASTER_TYPES {
        let output = registry
            .execute(
                "get_disaster_summary",
                params(&[("disaster_type", json!(disaster))]),
            )
            .await
            .unwrap();
        assert!(output.is_success(), "{} should be supported", disaster);
        assert!(!output.get_str("summary").unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_unknown_disaster_lists_supported_types() {
    let server = MockServer::start().await;
    let registry = registry_for(&server).await;

    let output = registry
        .execute(
            "get_disaster_summary",
            params(&[("disaster_type", json!("meteor"))]),
        )
        .await
        .unwrap();

    assert!(!output.is_success());
    let message = output.error_message().unwrap();
    for disaster in DISASTER_TYPES {
        assert!(message.contains(disaster));
    }
}

#[tokio::test]
async fn test_lookup_is_case_insensitive() {
    let server = MockServer::start().await;
    let registry = registry_for(&server).await;

    let upper = registry
        .execute(
            "get_disaster_summary",
            params(&[("disaster_type", json!("HURRICANE"))]),
        )
        .await
        .unwrap();
    let lower = registry
        .execute(
            "get_disaster_summary",
            params(&[("disaster_type", json!("hurricane"))]),
        )
        .await
        .unwrap();

    assert_eq!(upper.get("summary"), lower.get("summary"));
}

#[tokio::test]
async fn test_empty_seismic_feed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary/4.5_day.geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"features": []})))
        .mount(&server)
        .await;

    let registry = registry_for(&server).await;
    let output = registry
        .execute("get_recent_earthquakes", HashMap::new())
        .await
        .unwrap();

    assert!(output.is_success());
    assert_eq!(output.get("count"), Some(&json!(0)));
}

#[tokio::test]
async fn test_busy_seismic_feed_is_capped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/summary/2.5_day.geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "features": (0..12).map(quake).collect::<Vec<_>>()
        })))
        .mount(&server)
        .await;

    let registry = registry_for(&server).await;
    let output = registry
        .execute(
            "get_recent_earthquakes",
            params(&[("min_magnitude", json!(2.5))]),
        )
        .await
        .unwrap();

    assert_eq!(output.get("count"), Some(&json!(12)));
    assert_eq!(output.get("earthquakes").unwrap().as_array().unwrap().len(), 10);
    assert_eq!(output.get_str("summary").unwrap().matches("   Time: ").count(), 5);
}

#[tokio::test]
async fn test_weather_service_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/alerts/active"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let registry = registry_for(&server).await;
    let output = registry
        .execute("get_weather_alerts", HashMap::new())
        .await
        .unwrap();

    assert!(!output.is_success());
    assert!(output.error_message().unwrap().contains("500"));
}

#[tokio::test]
async fn test_severity_match_and_listing() {
    let server = MockServer::start().await;
    let registry = registry_for(&server).await;

    let matched = registry
        .execute(
            "analyze_disaster_severity",
            params(&[("disaster_type", json!("tornado")), ("measurement", json!("EF3"))]),
        )
        .await
        .unwrap();
    assert!(matched
        .get_str("severity_analysis")
        .unwrap()
        .contains("Severe damage - 136-165 mph winds"));

    let listing = registry
        .execute(
            "analyze_disaster_severity",
            params(&[("disaster_type", json!("tornado")), ("measurement", json!("ef9"))]),
        )
        .await
        .unwrap();
    let levels = listing.get_str("severity_levels").unwrap();
    for level in ["EF0", "EF1", "EF2", "EF3", "EF4", "EF5"] {
        assert!(levels.contains(level));
    }
}

#[tokio::test]
async fn test_resources_general_and_specific() {
    let server = MockServer::start().await;
    let registry = registry_for(&server).await;

    let general = registry
        .execute("get_emergency_resources", HashMap::new())
        .await
        .unwrap();
    let specific = registry
        .execute(
            "get_emergency_resources",
            params(&[("disaster_type", json!("earthquake"))]),
        )
        .await
        .unwrap();

    let general = general.get_str("resources").unwrap();
    let specific = specific.get_str("resources").unwrap();
    assert!(general.contains("911"));
    assert!(!general.contains("Earthquake-Specific Resources"));
    assert!(specific.starts_with(general));
    assert!(specific.contains("Earthquake-Specific Resources"));
}

#[tokio::test]
async fn test_executor_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/index-at.xml"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let executor = RegistryToolExecutor::new(registry_for(&server).await);
    assert_eq!(executor.tool_definitions().len(), 7);

    let request = ToolRequest::from_call(
        "call-1".to_string(),
        "get_active_hurricanes".to_string(),
        "",
    )
    .unwrap();
    let result = executor.execute(request).await;

    assert_eq!(result.tool_call_id, "call-1");
    assert!(!result.success);
    let body: Value = serde_json::from_str(&result.content).unwrap();
    assert_eq!(body["status"], "error");
    assert_eq!(
        body["error_message"],
        "Could not fetch hurricane data. Status code: 503"
    );

    let request = ToolRequest::from_call(
        "call-2".to_string(),
        "get_active_wildfires".to_string(),
        r#"{"state": "CA"}"#,
    )
    .unwrap();
    let result = executor.execute(request).await;
    assert!(result.success);
    let body: Value = serde_json::from_str(&result.content).unwrap();
    assert_eq!(body["state_filter_applied"], false);
}

#[tokio::test]
#[ignore = "requires network access to USGS"]
async fn test_live_usgs_feed() {
    let registry = registry_with_config(&DisasterToolsConfig::default());
    let output = registry
        .execute("get_recent_earthquakes", HashMap::new())
        .await
        .unwrap();
    assert!(output.is_success(), "{:?}", output.error_message());
}
