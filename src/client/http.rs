//! reqwest client construction for EBS round trips

use crate::error::{Error, Result};
use reqwest::blocking::{Client, ClientBuilder};
use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("str-ebs-client/", env!("CARGO_PKG_VERSION"));

/// Builder preconfigured for EBS round trips
/// Features:
/// - No client-side timeout (a hung connection blocks the caller)
/// - No idle connections kept between calls
///
/// Callers may add settings (proxy, TLS roots) before building.
pub fn builder() -> ClientBuilder {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(None::<Duration>)
        .pool_max_idle_per_host(0)
}

/// Create the HTTP client used by [`EbsClient::new`](super::EbsClient::new)
///
/// # Errors
///
/// Returns an error if the client cannot be built (e.g. no TLS backend).
pub fn create_client() -> Result<Client> {
    builder()
        .build()
        .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))
}
