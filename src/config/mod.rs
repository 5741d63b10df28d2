//! Configuration for the metering callback
//!
//! All settings come from `AFLO_*` environment variables; only the API key
//! is required. Configuration is captured once at construction and never
//! mutated afterwards.


use std::env;
use std::time::Duration;

use tracing::debug;

use crate::core::types::{MeteringError, Result};

/// Required ingestion credential
pub const ENV_API_KEY: &str = "AFLO_API_KEY";
/// Ingestion endpoint override
pub const ENV_API_ENDPOINT: &str = "AFLO_API_ENDPOINT";
/// Gates the per-call object-metadata events
pub const ENV_SEND_OBJECT_METADATA: &str = "AFLO_SEND_OBJECT_METADATA";
/// Free-text environment tag stamped on every event
pub const ENV_HOSTED_ENV: &str = "AFLO_HOSTED_ENV";
/// Per-send request timeout, seconds
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "AFLO_REQUEST_TIMEOUT_SECS";
/// Upper bound on concurrently in-flight detached sends
pub const ENV_MAX_INFLIGHT_SENDS: &str = "AFLO_MAX_INFLIGHT_SENDS";

pub const DEFAULT_ENDPOINT: &str = "https://ingest.amberflo.io";
pub const DEFAULT_HOSTED_ENV: &str = "unknown";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_MAX_INFLIGHT_SENDS: usize = 64;

/// Immutable settings for [`AmberfloLogger`](crate::sender::AmberfloLogger)
#[derive(Debug, Clone)]
pub struct AmberfloConfig {
    /// Ingestion API key, sent as the `x-api-key` header
    pub api_key: String,

    /// Ingestion endpoint URL
    pub endpoint: String,

    /// Whether to emit object-metadata events alongside usage events
    pub send_metadata: bool,

    /// Environment tag included verbatim in every event's dimensions
    pub hosted_env: String,

    /// Timeout applied to each delivery request
    pub request_timeout: Duration,

    /// Permits for detached sends; batches beyond the bound are dropped
    pub max_inflight_sends: usize,
}

impl AmberfloConfig {
    /// Build a configuration with all defaults except the API key.
    ///
    /// Fails when the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(MeteringError::configuration(
                ENV_API_KEY,
                "API key must not be empty",
            ));
        }

        Ok(Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            send_metadata: true,
            hosted_env: DEFAULT_HOSTED_ENV.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_inflight_sends: DEFAULT_MAX_INFLIGHT_SENDS,
        })
    }

    /// Load configuration from `AFLO_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Shared implementation of [`from_env`](Self::from_env), parameterized
    /// over the variable lookup so tests stay independent of process state.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading Amberflo configuration from environment variables");

        let api_key = lookup(ENV_API_KEY).ok_or_else(|| {
            MeteringError::configuration(ENV_API_KEY, "missing required API key")
        })?;

        let mut config = Self::new(api_key)?;

        if let Some(endpoint) = lookup(ENV_API_ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(flag) = lookup(ENV_SEND_OBJECT_METADATA) {
            config.send_metadata = parse_boolean(&flag);
        }
        if let Some(hosted_env) = lookup(ENV_HOSTED_ENV) {
            config.hosted_env = hosted_env;
        }
        if let Some(timeout) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            let secs: u64 = timeout.parse().map_err(|e| {
                MeteringError::configuration(
                    ENV_REQUEST_TIMEOUT_SECS,
                    format!("invalid timeout: {e}"),
                )
            })?;
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(bound) = lookup(ENV_MAX_INFLIGHT_SENDS) {
            config.max_inflight_sends = bound.parse().map_err(|e| {
                MeteringError::configuration(
                    ENV_MAX_INFLIGHT_SENDS,
                    format!("invalid in-flight bound: {e}"),
                )
            })?;
        }

        Ok(config)
    }
}

/// "true" and "yes" (any case) are truthy, everything else is false.
fn parse_boolean(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes")
}
