//! Usage-tuple derivation and meter naming

use crate::core::types::event::NOT_APPLICABLE;
use crate::core::types::log_record::{ModelParameters, UsageObject};

/// One measured quantity of a call: unit, amount, direction, cache flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct UsageTuple {
    pub unit: &'static str,
    pub quantity: i64,
    pub direction: &'static str,
    pub cache: &'static str,
}

impl UsageTuple {
    fn new(unit: &'static str, quantity: i64, direction: &'static str) -> Self {
        // TODO derive "cache" once the gateway reports cached-token splits
        Self {
            unit,
            quantity,
            direction,
            cache: NOT_APPLICABLE,
        }
    }
}

/// Derive the usage tuples for a call; zero quantities are dropped.
pub(super) fn extract_usage(
    usecase: &str,
    usage: Option<&UsageObject>,
    model_parameters: Option<&ModelParameters>,
) -> Vec<UsageTuple> {
    let prompt_tokens = usage.and_then(|u| u.prompt_tokens).unwrap_or(0);
    let completion_tokens = usage.and_then(|u| u.completion_tokens).unwrap_or(0);

    let mut tuples = if usecase == "aimage_generation" {
        let images = model_parameters.and_then(|p| p.n).unwrap_or(1);

        vec![
            UsageTuple::new("token", prompt_tokens, "in"),
            UsageTuple::new("image", images, "out"),
            UsageTuple::new("image_token", completion_tokens, "out"),
        ]
    } else {
        vec![
            UsageTuple::new("token", prompt_tokens, "in"),
            UsageTuple::new("token", completion_tokens, "out"),
        ]
    };

    tuples.retain(|tuple| tuple.quantity != 0);
    tuples
}

/// Map a usage unit to its meter name.
pub(super) fn meter_name(unit: &str) -> String {
    match unit {
        "query" => "llm_queries".to_string(),
        "token" => "llm_text_tokens".to_string(),
        _ => format!("llm_{unit}s"),
    }
}
