//! Core data types for the metering callback

pub mod errors;
pub mod event;
pub mod log_record;

pub use errors::{MeteringError, Result};
pub use event::{Dimensions, UsageEvent};
pub use log_record::LogRecord;
