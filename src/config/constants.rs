//! Configuration constants.
//!
//! This module defines the operational constants used throughout the engine:
//! per-source timeouts, provider endpoints, the Tor refresh interval and
//! size limits for captured data.

use std::time::Duration;

// Network operation timeouts
/// DNS query timeout in seconds (forward, reverse and typed record lookups)
/// Most queries complete in <1s; 3s fails fast on unresponsive servers.
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Per-provider geolocation request timeout in seconds
pub const GEO_TIMEOUT_SECS: u64 = 5;
/// TCP connection timeout in seconds (TLS inspector)
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;
/// TLS handshake timeout in seconds
pub const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 5;
/// HTTP reachability probe timeout in seconds
pub const HTTP_PROBE_TIMEOUT_SECS: u64 = 8;
/// Tor bulk exit list download timeout in seconds
pub const TOR_FETCH_TIMEOUT_SECS: u64 = 8;

/// Tor exit list refresh interval: 6 hours.
/// The Tor Project regenerates the bulk list roughly hourly; six hours of
/// staleness is tolerated.
pub const TOR_REFRESH_INTERVAL: Duration = Duration::from_secs(6 * 60 * 60);

/// Standard HTTPS port probed by the TLS inspector and HTTP probe
pub const HTTPS_PORT: u16 = 443;

// Endpoints
/// Tor Project bulk exit list (plain text, one IP per line)
pub const TOR_BULK_EXIT_LIST_URL: &str = "https://check.torproject.org/torbulkexitlist";
/// ip-api.com base URL (free tier is HTTP only)
pub const IP_API_BASE_URL: &str = "http://ip-api.com";
/// ipwho.is base URL
pub const IPWHO_BASE_URL: &str = "https://ipwho.is";
/// ipinfo.io base URL
pub const IPINFO_BASE_URL: &str = "https://ipinfo.io";

/// Fields requested from ip-api.com.
/// `proxy` and `hosting` are the only provider-reported risk flags in the chain.
pub const IP_API_FIELDS: &str =
    "status,message,country,countryCode,regionName,city,zip,lat,lon,timezone,isp,org,as,reverse,proxy,hosting";

/// Default User-Agent string for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("target_recon/", env!("CARGO_PKG_VERSION"));

// Captured data limits
/// Maximum HTTP header value length in characters.
/// Longer values are truncated before they land in the report.
pub const MAX_HEADER_VALUE_LENGTH: usize = 1000;
/// Maximum number of response headers captured by the HTTP probe
pub const MAX_CAPTURED_HEADERS: usize = 64;
/// Maximum hostname length (RFC 1035)
pub const MAX_HOSTNAME_LENGTH: usize = 253;
