//! Metering event types and dimension constants

use std::collections::BTreeMap;

use serde::Serialize;

/// Sentinel for dimensions with no resolved value
pub const UNKNOWN: &str = "unknown";

/// Sentinel region for platforms without region resolution
pub const GLOBAL: &str = "global";

/// Sentinel for flag-like dimensions that are off or not implemented
pub const NOT_APPLICABLE: &str = "n";

/// Gateway tag attached to every event
pub const GATEWAY: &str = "litellm";

/// Meter names
pub const METER_API_CALL: &str = "llm_api_call";
pub const METER_API_CALL_MS: &str = "llm_api_call_ms";
pub const METER_ERROR_DETAILS: &str = "llm_error_details";
pub const METER_OBJECT_METADATA: &str = "object_metadata_event";

/// Flat tag set attached to an event for aggregation and filtering.
///
/// BTreeMap keeps serialization deterministic, so extracting the same record
/// twice produces byte-identical payloads.
pub type Dimensions = BTreeMap<String, String>;

/// One billable measurement tied to a request.
///
/// Produced fresh per call by the extractor, serialized into the ingestion
/// payload and discarded; it has no identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageEvent {
    /// Metric name, e.g. "llm_text_tokens"
    #[serde(rename = "meterApiName")]
    pub meter_api_name: String,

    #[serde(rename = "meterValue")]
    pub meter_value: i64,

    /// Request start time, epoch milliseconds; shared by all events of a call
    #[serde(rename = "meterTimeInMillis")]
    pub meter_time_in_millis: i64,

    /// Request id; shared by all events of a call
    #[serde(rename = "uniqueId")]
    pub unique_id: String,

    pub dimensions: Dimensions,
}
