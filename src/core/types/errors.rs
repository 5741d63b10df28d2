//! Metering error types

/// Top-level error type for the metering callback
#[derive(Debug, thiserror::Error)]
pub enum MeteringError {
    /// Missing or invalid configuration at construction time
    #[error("Configuration error: {field}: {reason}")]
    Configuration { field: String, reason: String },

    /// Failure deriving events from a malformed log record
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Network failure or non-success status while sending events
    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl MeteringError {
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction(message.into())
    }

    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery(message.into())
    }
}

impl From<serde_json::Error> for MeteringError {
    fn from(err: serde_json::Error) -> Self {
        MeteringError::Extraction(err.to_string())
    }
}

impl From<reqwest::Error> for MeteringError {
    fn from(err: reqwest::Error) -> Self {
        MeteringError::Delivery(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, MeteringError>;
