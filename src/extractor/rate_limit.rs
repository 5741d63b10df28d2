//! Error-detail extraction, including 429 message enrichment
//!
//! Rate-limit messages differ per provider dialect; each dialect gets its own
//! pattern. A message that matches neither still yields plain class/code
//! details — enrichment is best effort, never a failure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::log_record::ErrorInformation;

/// OpenAI-style message, e.g.
/// "Rate limit reached for gpt-4 in organization org-1 on tokens per min (TPM): Limit 10000"
static OPENAI_429_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Rate limit reached .* on .*\(([^:]+)\): Limit (\d+)").expect("valid pattern")
});

/// Gateway-enforced limit message, e.g.
/// "Rate limit exceeded for team: ... Limit type: requests ... Current limit: 3"
static GATEWAY_429_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Rate limit exceeded for (\w+):.+Limit type: (\w+).+Current limit: (\d+)")
        .expect("valid pattern")
});

/// Error facts extracted from a failed call's error information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetails {
    /// Exception class name reported by the gateway, e.g. "RateLimitError"
    pub class: String,
    /// HTTP-ish error code as a string, e.g. "429"
    pub code: Option<String>,
    /// What the limit applied to ("provider", a team, a key)
    pub subject: Option<String>,
    /// Limit kind, e.g. "rpm" or "tpm"
    pub rate: Option<String>,
    /// The configured limit value
    pub limit: Option<String>,
}

/// Build error details from a record's error information.
///
/// Returns `None` when `error_class` is absent or empty — the common
/// successful-call case.
pub(super) fn extract_error_details(
    error_information: Option<&ErrorInformation>,
) -> Option<ErrorDetails> {
    let info = error_information?;
    let class = info
        .error_class
        .as_deref()
        .filter(|class| !class.is_empty())?
        .to_string();

    let mut details = ErrorDetails {
        class,
        code: info.error_code.clone(),
        subject: None,
        rate: None,
        limit: None,
    };

    if details.code.as_deref() == Some("429") {
        let message = info.error_message.as_deref().unwrap_or_default();

        if info.llm_provider.as_deref() == Some("openai") {
            if let Some(caps) = OPENAI_429_PATTERN.captures(message) {
                details.subject = Some("provider".to_string());
                details.rate = Some(caps[1].to_lowercase());
                details.limit = Some(caps[2].to_string());
            }
        } else if let Some(caps) = GATEWAY_429_PATTERN.captures(message) {
            details.subject = Some(caps[1].to_string());
            details.rate = Some(
                if &caps[2] == "requests" { "rpm" } else { "tpm" }.to_string(),
            );
            details.limit = Some(caps[3].to_string());
        }
    }

    Some(details)
}
