//! HTTP reachability probe.
//!
//! A single `GET` against the target's HTTPS root. Any HTTP response, whatever
//! its status, means the service is reachable; connection errors and timeouts
//! mean it is not. Response headers are captured for the report.

use std::time::Duration;

use serde::Serialize;

use crate::config::{HTTPS_PORT, MAX_CAPTURED_HEADERS};
use crate::utils::sanitize::sanitize_header_value;

/// One captured response header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpHeader {
    /// Lower-cased header name
    pub name: String,
    /// Sanitized, length-bounded value
    pub value: String,
}

/// Outcome of the reachability probe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HttpProbeResult {
    /// True when any HTTP response arrived
    pub reachable: bool,
    /// Response status code
    pub status: Option<u16>,
    /// `Server` header value
    pub server: Option<String>,
    /// Response headers in received order
    pub headers: Vec<HttpHeader>,
    /// Failure description when unreachable
    pub error: Option<String>,
}

impl HttpProbeResult {
    fn unreachable(error: String) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

/// `https://<host>/`, with the port appended when it is not 443.
///
/// `host` must already be URL-ready (IPv6 literals bracketed).
pub fn probe_target_url(host: &str, port: u16) -> String {
    if port == HTTPS_PORT {
        format!("https://{host}/")
    } else {
        format!("https://{host}:{port}/")
    }
}

/// Sends one `GET` to `url` and records whether anything answered.
///
/// `client` is expected to accept invalid certificates and not follow
/// redirects; see `initialization::init_probe_client`.
pub async fn probe_url(client: &reqwest::Client, url: &str, timeout: Duration) -> HttpProbeResult {
    log::debug!("Probing {url}");

    let response = match tokio::time::timeout(timeout, client.get(url).send()).await {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            log::info!("{url} is unreachable: {e}");
            return HttpProbeResult::unreachable(e.to_string());
        }
        Err(_) => {
            log::info!("{url} did not answer within {timeout:?}");
            return HttpProbeResult::unreachable(format!("timed out after {timeout:?}"));
        }
    };

    let server = response
        .headers()
        .get(reqwest::header::SERVER)
        .map(|value| sanitize_header_value(&String::from_utf8_lossy(value.as_bytes())));
    let headers: Vec<HttpHeader> = response
        .headers()
        .iter()
        .take(MAX_CAPTURED_HEADERS)
        .map(|(name, value)| HttpHeader {
            name: name.as_str().to_string(),
            value: sanitize_header_value(&String::from_utf8_lossy(value.as_bytes())),
        })
        .collect();

    log::debug!("{url} answered {} with {} headers", response.status(), headers.len());

    HttpProbeResult {
        reachable: true,
        status: Some(response.status().as_u16()),
        server,
        headers,
        error: None,
    }
}
