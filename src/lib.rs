//! # amberflo-metering
//!
//! Usage-metering callback for LLM gateway request logs: turns one completed
//! call's standard logging object into Amberflo metering events (call counts,
//! latency, token and image usage, error details) and ships them best-effort
//! to the ingestion endpoint.
//!
//! ## Design
//!
//! - **Extraction is pure**: [`extract_events`] maps one [`LogRecord`] to a
//!   flat event list, no I/O, fully deterministic.
//! - **Delivery is fire-and-forget**: the per-call hook spawns a detached,
//!   bounded send and returns immediately; the host request path is never
//!   delayed and metering failures are only visible in logs.
//! - **Best effort only**: no retries, no durable queue. Events of a dropped
//!   send are lost.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use amberflo_metering::AmberfloLogger;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads AFLO_API_KEY (required), AFLO_API_ENDPOINT, AFLO_HOSTED_ENV,
//!     // AFLO_SEND_OBJECT_METADATA and the delivery tuning variables.
//!     let logger = AmberfloLogger::from_env()?;
//!
//!     // Register with the host gateway; it invokes the hook per completed
//!     // call with a record embedding the standard logging object.
//!     let record = serde_json::json!({
//!         "standard_logging_object": {
//!             "id": "req-1",
//!             "startTime": 1000.0,
//!             "endTime": 1000.25,
//!             "call_type": "completion"
//!         }
//!     });
//!     logger.log_event(&record);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod extractor;
pub mod sender;
pub mod utils;

pub use config::AmberfloConfig;
pub use core::types::{Dimensions, LogRecord, MeteringError, Result, UsageEvent};
pub use extractor::extract_events;
pub use sender::AmberfloLogger;
