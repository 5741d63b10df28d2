//! Extraction through the public API

use amberflo_metering::{LogRecord, extract_events};

use crate::common::fixtures;

fn parse(value: serde_json::Value) -> LogRecord {
    serde_json::from_value(value).expect("valid log record")
}

#[test]
fn test_completion_scenario() {
    let log = parse(fixtures::completion_record("req-42"));
    let events = extract_events(&log, true, "prod");

    assert_eq!(events.len(), 4);
    let names: Vec<&str> = events.iter().map(|e| e.meter_api_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "llm_api_call",
            "llm_api_call_ms",
            "llm_text_tokens",
            "llm_text_tokens"
        ]
    );
    assert!(events.iter().all(|e| e.unique_id == "req-42"));
    assert!(events.iter().all(|e| e.meter_time_in_millis == 1_000_000));
    assert!(
        events
            .iter()
            .all(|e| e.dimensions.get("hosted_env").map(String::as_str) == Some("prod"))
    );
}

#[test]
fn test_attributed_call_adds_one_metadata_event() {
    let log = parse(fixtures::with_attribution(
        fixtures::completion_record("req-42"),
        "bu-1",
        "team-9",
    ));

    let events = extract_events(&log, true, "prod");
    assert_eq!(events.len(), 5);
    assert_eq!(events[0].meter_api_name, "object_metadata_event");
    assert_eq!(
        events[0].dimensions.get("parentValue").map(String::as_str),
        Some("bu-1")
    );

    let gated = extract_events(&log, false, "prod");
    assert_eq!(gated.len(), 4);
    assert_eq!(events[1..], gated[..]);
}

#[test]
fn test_failed_call_appends_error_details() {
    let log = parse(fixtures::with_error(
        fixtures::completion_record("req-42"),
        "RateLimitError",
        "429",
        "Rate limit reached for gpt-4 in organization org-1 on tokens (requests): Limit 3",
    ));

    let events = extract_events(&log, true, "prod");
    let error = events.last().expect("error event");
    assert_eq!(error.meter_api_name, "llm_error_details");
    assert_eq!(error.dimensions.get("class").map(String::as_str), Some("RateLimitError"));
    assert_eq!(error.dimensions.get("rate").map(String::as_str), Some("requests"));
    assert_eq!(error.dimensions.get("limit").map(String::as_str), Some("3"));
    assert_eq!(
        events[0].dimensions.get("error_code").map(String::as_str),
        Some("429")
    );
}
