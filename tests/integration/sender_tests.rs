//! Delivery against a mock ingestion endpoint

use std::time::Duration;

use amberflo_metering::{AmberfloConfig, AmberfloLogger};
use serde_json::Value;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{fixtures, init_test_logging};

fn logger_for(endpoint: String, send_metadata: bool, hosted_env: &str) -> AmberfloLogger {
    let mut config = AmberfloConfig::new("integration-key").expect("valid key");
    config.endpoint = endpoint;
    config.send_metadata = send_metadata;
    config.hosted_env = hosted_env.to_string();
    AmberfloLogger::new(config).expect("logger builds")
}

async fn received_bodies(server: &MockServer) -> Vec<Vec<Value>> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("JSON array body"))
        .collect()
}

async fn wait_for_requests(server: &MockServer, count: usize) {
    for _ in 0..200 {
        let seen = server.received_requests().await.unwrap_or_default().len();
        if seen >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {count} ingestion requests");
}

#[tokio::test]
async fn test_attributed_failed_call_ships_full_event_set() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-api-key", "integration-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let logger = logger_for(server.uri(), true, "prod-eu");
    let log_object = fixtures::with_error(
        fixtures::with_attribution(fixtures::completion_record("req-7"), "bu-1", "team-9"),
        "RateLimitError",
        "429",
        "slow down",
    );
    logger.log_event(&fixtures::host_record(log_object));
    wait_for_requests(&server, 1).await;

    let bodies = received_bodies(&server).await;
    let events = &bodies[0];
    assert_eq!(events.len(), 6);
    assert_eq!(events[0]["meterApiName"], "object_metadata_event");
    assert_eq!(events[1]["meterApiName"], "llm_api_call");
    assert_eq!(events[1]["dimensions"]["hosted_env"], "prod-eu");
    assert_eq!(events[1]["dimensions"]["business_unit_id"], "bu-1");
    assert_eq!(events[5]["meterApiName"], "llm_error_details");
    assert!(events.iter().all(|e| e["uniqueId"] == "req-7"));
}

#[tokio::test]
async fn test_metadata_gate_respected_end_to_end() {
    init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let logger = logger_for(server.uri(), false, "prod-eu");
    let log_object =
        fixtures::with_attribution(fixtures::completion_record("req-8"), "bu-1", "team-9");
    logger.log_event(&fixtures::host_record(log_object));
    wait_for_requests(&server, 1).await;

    let bodies = received_bodies(&server).await;
    assert!(
        bodies[0]
            .iter()
            .all(|e| e["meterApiName"] != "object_metadata_event")
    );
}
