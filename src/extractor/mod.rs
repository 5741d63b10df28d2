//! Event extraction from completed-call log records
//!
//! `extract_events` is the heart of the crate: a pure, synchronous mapping
//! from one [`LogRecord`] to the flat metering events shipped to the
//! ingestion endpoint. It never performs I/O and is deterministic — the same
//! record always yields the same event list.

mod metadata;
mod rate_limit;
mod region;
mod usage;


pub use rate_limit::ErrorDetails;

use crate::core::types::event::{
    GATEWAY, GLOBAL, METER_API_CALL, METER_API_CALL_MS, METER_ERROR_DETAILS,
    METER_OBJECT_METADATA, NOT_APPLICABLE, UNKNOWN,
};
use crate::core::types::log_record::RecordMetadata;
use crate::core::types::{Dimensions, LogRecord, UsageEvent};

/// Derive the metering events for one completed call.
///
/// Event order is fixed: object-metadata events (when `send_metadata` is
/// set), the call-count and call-duration events, one event per non-zero
/// usage tuple, and finally an error-details event for failed calls.
pub fn extract_events(log: &LogRecord, send_metadata: bool, hosted_env: &str) -> Vec<UsageEvent> {
    let request_time_ms = (log.start_time * 1000.0).round() as i64;
    let request_duration_ms = ((log.end_time - log.start_time) * 1000.0).round() as i64;

    let (business_unit_id, team) = resolve_organization(&log.metadata);
    let (provider, model) = resolve_provider_model(log);
    let (sku, platform) = resolve_pricing(log);

    let batch = match &log.hidden_params.batch_models {
        Some(models) if !models.is_empty() => "y",
        _ => NOT_APPLICABLE,
    };

    let usecase = log.call_type.as_deref().unwrap_or(UNKNOWN);

    let key_name = non_empty(log.metadata.user_api_key_alias.as_deref()).unwrap_or(UNKNOWN);
    let user = non_empty(log.metadata.user_api_key_user_id.as_deref()).unwrap_or(UNKNOWN);

    let region = region::resolve_region(&platform, log.api_base.as_deref())
        .unwrap_or_else(|| GLOBAL.to_string());

    let error_details = rate_limit::extract_error_details(log.error_information.as_ref());
    let error_code = error_details
        .as_ref()
        .and_then(|details| details.code.as_deref())
        .unwrap_or(NOT_APPLICABLE);

    let usage = usage::extract_usage(
        usecase,
        log.metadata.usage_object.as_ref(),
        log.model_parameters.as_ref(),
    );

    // TODO implement "tier" once pricing tiers land in the model map
    let tier = NOT_APPLICABLE;

    let mut base_dimensions = Dimensions::new();
    base_dimensions.insert("business_unit_id".to_string(), business_unit_id);
    base_dimensions.insert("team".to_string(), team);
    base_dimensions.insert("hosted_env".to_string(), hosted_env.to_string());
    base_dimensions.insert("key_name".to_string(), key_name.to_string());
    base_dimensions.insert("model".to_string(), model);
    base_dimensions.insert("platform".to_string(), platform.clone());
    base_dimensions.insert("provider".to_string(), provider);
    base_dimensions.insert("region".to_string(), region);
    base_dimensions.insert("usecase".to_string(), usecase.to_string());
    base_dimensions.insert("user".to_string(), user.to_string());
    base_dimensions.insert("gateway".to_string(), GATEWAY.to_string());

    let with_pricing = |mut dimensions: Dimensions| {
        dimensions.insert("sku".to_string(), sku.clone());
        dimensions.insert("tier".to_string(), tier.to_string());
        dimensions.insert("batch".to_string(), batch.to_string());
        dimensions
    };

    let event = |meter_api_name: &str, meter_value: i64, dimensions: Dimensions| UsageEvent {
        meter_api_name: meter_api_name.to_string(),
        meter_value,
        meter_time_in_millis: request_time_ms,
        unique_id: log.id.clone(),
        dimensions,
    };

    let mut events = Vec::new();

    if send_metadata {
        for object in metadata::object_metadata(&log.metadata) {
            events.push(event(METER_OBJECT_METADATA, 1, object));
        }
    }

    let mut call_dimensions = with_pricing(base_dimensions.clone());
    call_dimensions.insert("error_code".to_string(), error_code.to_string());

    events.push(event(METER_API_CALL, 1, call_dimensions.clone()));
    events.push(event(METER_API_CALL_MS, request_duration_ms, call_dimensions));

    for tuple in usage {
        let mut dimensions = with_pricing(base_dimensions.clone());
        dimensions.insert("type".to_string(), tuple.direction.to_string());
        dimensions.insert("cache".to_string(), tuple.cache.to_string());
        events.push(event(
            &usage::meter_name(tuple.unit),
            tuple.quantity,
            dimensions,
        ));
    }

    if let Some(details) = error_details {
        let mut dimensions = base_dimensions;
        dimensions.insert("class".to_string(), details.class);
        if let Some(code) = details.code {
            dimensions.insert("code".to_string(), code);
        }
        if let Some(subject) = details.subject {
            dimensions.insert("subject".to_string(), subject);
        }
        if let Some(rate) = details.rate {
            dimensions.insert("rate".to_string(), rate);
        }
        if let Some(limit) = details.limit {
            dimensions.insert("limit".to_string(), limit);
        }
        events.push(event(METER_ERROR_DETAILS, 1, dimensions));
    }

    events
}

/// Cost-attribution ids: business unit falls back to team, both to "unknown".
fn resolve_organization(metadata: &RecordMetadata) -> (String, String) {
    let business_unit_id = metadata
        .user_api_key_auth_metadata
        .as_ref()
        .and_then(|auth| auth.business_unit_id.as_deref())
        .filter(|id| !id.is_empty());
    let team_id = metadata
        .user_api_key_team_id
        .as_deref()
        .filter(|id| !id.is_empty());

    (
        business_unit_id.or(team_id).unwrap_or(UNKNOWN).to_string(),
        team_id.unwrap_or(UNKNOWN).to_string(),
    )
}

/// Recover provider-prefixed model identifiers: outside of openai, a dotted
/// model name like "anthropic.claude-v2" carries the real provider in its
/// first label.
fn resolve_provider_model(log: &LogRecord) -> (String, String) {
    let provider = log.custom_llm_provider.as_deref().unwrap_or(UNKNOWN);
    let model = log.model.as_deref().unwrap_or(UNKNOWN);

    if provider != "openai" {
        if let Some((prefix, rest)) = model.split_once('.') {
            return (prefix.to_string(), rest.to_string());
        }
    }

    (provider.to_string(), model.to_string())
}

/// sku and platform from the pricing lookup; both "unknown" when the lookup
/// failed (error scenarios).
fn resolve_pricing(log: &LogRecord) -> (String, String) {
    match &log.model_map_information.model_map_value {
        Some(value) => (
            value.key.as_deref().unwrap_or(UNKNOWN).to_string(),
            value.litellm_provider.as_deref().unwrap_or(UNKNOWN).to_string(),
        ),
        None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
