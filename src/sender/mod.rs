//! The Amberflo logging callback
//!
//! [`AmberfloLogger`] is the object the host gateway registers as a
//! success/failure callback. Per completed call it extracts metering events
//! from the standard logging object and ships them in a detached task, so the
//! host's request path is never delayed by delivery. Extraction and delivery
//! failures are logged and swallowed — the hooks never raise.


use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

use crate::config::AmberfloConfig;
use crate::core::types::{LogRecord, MeteringError, Result, UsageEvent};
use crate::extractor::extract_events;
use crate::utils::net::http::build_ingest_client;

/// Key under which the host embeds the per-call log object
const STANDARD_LOGGING_OBJECT: &str = "standard_logging_object";

/// Usage-metering callback with best-effort, non-blocking delivery.
///
/// Construct one at startup and hand it to the host's callback registry;
/// configuration is captured once and immutable afterwards.
pub struct AmberfloLogger {
    config: AmberfloConfig,
    client: Client,
    inflight: Arc<Semaphore>,
}

impl AmberfloLogger {
    /// Build a logger from `AFLO_*` environment variables.
    ///
    /// Fails with a configuration error when `AFLO_API_KEY` is absent.
    pub fn from_env() -> Result<Self> {
        Self::new(AmberfloConfig::from_env()?)
    }

    pub fn new(config: AmberfloConfig) -> Result<Self> {
        let client = build_ingest_client(config.request_timeout)?;
        let inflight = Arc::new(Semaphore::new(config.max_inflight_sends));

        Ok(Self {
            config,
            client,
            inflight,
        })
    }

    /// Per-call hook, invoked by the host once per completed request.
    ///
    /// Pulls the standard logging object out of `record` (a record without
    /// one is ignored), derives the metering events and schedules an
    /// unawaited send. Never raises and never blocks on delivery; delivery
    /// needs an ambient Tokio runtime, without one the batch is dropped
    /// with a warning.
    pub fn log_event(&self, record: &Value) {
        let Some(log_object) = record.get(STANDARD_LOGGING_OBJECT) else {
            return;
        };
        if log_object.is_null() {
            return;
        }

        let log = match LogRecord::deserialize(log_object) {
            Ok(log) => log,
            Err(e) => {
                error!("failed extracting events: {}", MeteringError::from(e));
                return;
            }
        };

        let events = extract_events(&log, self.config.send_metadata, &self.config.hosted_env);
        if events.is_empty() {
            return;
        }

        self.dispatch(events);
    }

    /// Post-success hook required by the host's callback interface.
    pub async fn post_call_success_hook(&self) {}

    /// Fire-and-forget delivery: the caller never observes the outcome,
    /// failures surface only in logs. The semaphore bounds how many sends
    /// may be in flight; beyond that the batch is dropped rather than queued.
    /// Without an ambient Tokio runtime the batch is dropped as well — the
    /// hook must never panic into the host.
    fn dispatch(&self, events: Vec<UsageEvent>) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!(
                    batch_size = events.len(),
                    "no async runtime available, dropping event batch"
                );
                return;
            }
        };

        let permit = match Arc::clone(&self.inflight).try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                warn!(
                    batch_size = events.len(),
                    "too many in-flight sends, dropping event batch"
                );
                return;
            }
        };

        let client = self.client.clone();
        let endpoint = self.config.endpoint.clone();
        let api_key = self.config.api_key.clone();

        handle.spawn(async move {
            let _permit = permit;
            if let Err(e) = send_events(&client, &endpoint, &api_key, &events).await {
                warn!("failed sending events: {e}");
            }
        });
    }
}

/// POST one event batch as a JSON array; any non-2xx status is a failure.
async fn send_events(
    client: &Client,
    endpoint: &str,
    api_key: &str,
    events: &[UsageEvent],
) -> Result<()> {
    let response = client
        .post(endpoint)
        .header("x-api-key", api_key)
        .json(events)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(MeteringError::delivery(format!(
            "ingestion endpoint returned {status}"
        )));
    }

    debug!(batch_size = events.len(), "sent events");
    Ok(())
}
