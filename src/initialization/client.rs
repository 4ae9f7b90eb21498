//! HTTP client initialization.
//!
//! Two clients are built: one for intelligence sources (geolocation providers,
//! Tor exit list) and one for the reachability probe against the target itself.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the client used for geolocation providers and the Tor list.
///
/// Request timeouts are applied per call (each source has its own budget), so
/// the client only bounds the connect phase.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .connect_timeout(config.geo_timeout)
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the client used to probe the target.
///
/// - Invalid certificates are accepted: reachability is the signal, not trust
/// - Redirects are not followed: a single request is made
/// - Connect phase bounded by the TCP connect timeout
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_probe_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .danger_accept_invalid_certs(true)
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(config.tcp_connect_timeout.min(config.http_timeout))
        .pool_max_idle_per_host(0)
        .timeout(config.http_timeout + Duration::from_millis(250))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
