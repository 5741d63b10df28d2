//! Typed view of the gateway's standard logging object
//!
//! The host hands the callback one nested, partially-populated record per
//! completed call. Instead of poking into it field by field, the record is
//! deserialized once at the hook boundary into this model; every optional
//! field carries its defaulting rule at the point of use in the extractor.

use serde::Deserialize;

/// One completed-call log record as produced by the host gateway.
///
/// `id`, `startTime` and `endTime` are the only required fields; a record
/// missing them fails deserialization and is dropped by the hook.
#[derive(Debug, Clone, Deserialize)]
pub struct LogRecord {
    /// Request id, reused as the uniqueId of every derived event
    pub id: String,

    /// Request start, epoch seconds
    #[serde(rename = "startTime")]
    pub start_time: f64,

    /// Request end, epoch seconds
    #[serde(rename = "endTime")]
    pub end_time: f64,

    #[serde(default)]
    pub metadata: RecordMetadata,

    #[serde(default)]
    pub model_map_information: ModelMapInformation,

    #[serde(default)]
    pub hidden_params: HiddenParams,

    /// Operation name, e.g. "completion" or "aimage_generation"
    #[serde(default)]
    pub call_type: Option<String>,

    #[serde(default)]
    pub custom_llm_provider: Option<String>,

    #[serde(default)]
    pub model: Option<String>,

    /// Upstream base URL the call was routed to
    #[serde(default)]
    pub api_base: Option<String>,

    #[serde(default)]
    pub error_information: Option<ErrorInformation>,

    #[serde(default)]
    pub model_parameters: Option<ModelParameters>,
}

/// Auth and usage metadata attached to the record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordMetadata {
    /// Human-readable alias of the API key used for the call
    #[serde(default)]
    pub user_api_key_alias: Option<String>,

    #[serde(default)]
    pub user_api_key_user_id: Option<String>,

    #[serde(default)]
    pub user_api_key_team_id: Option<String>,

    #[serde(default)]
    pub user_api_key_team_alias: Option<String>,

    #[serde(default)]
    pub user_api_key_auth_metadata: Option<AuthMetadata>,

    #[serde(default)]
    pub usage_object: Option<UsageObject>,
}

/// Free-form metadata stored on the API key at auth time
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthMetadata {
    #[serde(default)]
    pub business_unit_id: Option<String>,
}

/// Token counts reported by the provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageObject {
    #[serde(default)]
    pub prompt_tokens: Option<i64>,

    #[serde(default)]
    pub completion_tokens: Option<i64>,
}

/// Result of the gateway's pricing/model-map lookup
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelMapInformation {
    /// Absent on error paths where no pricing lookup succeeded
    #[serde(default)]
    pub model_map_value: Option<ModelMapValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelMapValue {
    /// Pricing key, used as the sku dimension
    #[serde(default)]
    pub key: Option<String>,

    /// Backing platform, e.g. "bedrock" or "azure"
    #[serde(default)]
    pub litellm_provider: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HiddenParams {
    /// Non-empty when the call went through the batch API
    #[serde(default)]
    pub batch_models: Option<Vec<String>>,
}

/// Error description for failed calls; `error_class` absent means success
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorInformation {
    #[serde(default)]
    pub error_class: Option<String>,

    #[serde(default)]
    pub error_code: Option<String>,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub llm_provider: Option<String>,
}

/// Caller-supplied request parameters the extractor cares about
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelParameters {
    /// Number of images requested from an image-generation call
    #[serde(default)]
    pub n: Option<i64>,
}
