//! HTTP client construction for the ingestion endpoint
//!
//! One client is built per logger and reused for every send, keeping
//! connections to the ingestion host pooled instead of re-established per
//! batch.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

use crate::core::types::{MeteringError, Result};

const POOL_MAX_IDLE_PER_HOST: usize = 8;
const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const TCP_KEEPALIVE: Duration = Duration::from_secs(60);
const USER_AGENT: &str = concat!("amberflo-metering/", env!("CARGO_PKG_VERSION"));

/// Build the client used for event delivery, with the given request timeout.
pub fn build_ingest_client(request_timeout: Duration) -> Result<Client> {
    ClientBuilder::new()
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .pool_idle_timeout(POOL_IDLE_TIMEOUT)
        .timeout(request_timeout)
        .connect_timeout(CONNECT_TIMEOUT)
        .tcp_keepalive(TCP_KEEPALIVE)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| MeteringError::configuration("http_client", e.to_string()))
}
