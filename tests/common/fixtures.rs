//! Log-record fixtures shared by the integration tests

use serde_json::{Value, json};

/// A successful completion call with usage but no attribution metadata.
pub fn completion_record(id: &str) -> Value {
    json!({
        "id": id,
        "startTime": 1000.0,
        "endTime": 1000.25,
        "metadata": {
            "usage_object": {"prompt_tokens": 10, "completion_tokens": 5}
        },
        "model_map_information": {
            "model_map_value": {"key": "gpt-4", "litellm_provider": "openai"}
        },
        "hidden_params": {"batch_models": null},
        "call_type": "completion",
        "custom_llm_provider": "openai",
        "model": "gpt-4"
    })
}

/// Attach business-unit/team attribution to a record.
pub fn with_attribution(mut record: Value, business_unit_id: &str, team_id: &str) -> Value {
    record["metadata"]["user_api_key_team_id"] = json!(team_id);
    record["metadata"]["user_api_key_team_alias"] = json!("Research");
    record["metadata"]["user_api_key_auth_metadata"] =
        json!({"business_unit_id": business_unit_id});
    record
}

/// Attach error information to a record.
pub fn with_error(mut record: Value, class: &str, code: &str, message: &str) -> Value {
    record["error_information"] = json!({
        "error_class": class,
        "error_code": code,
        "error_message": message,
        "llm_provider": "openai"
    });
    record
}

/// Wrap a log object the way the host hands records to the callback.
pub fn host_record(log_object: Value) -> Value {
    json!({ "standard_logging_object": log_object })
}
