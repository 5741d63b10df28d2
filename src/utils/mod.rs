//! Shared utilities

pub mod net;
