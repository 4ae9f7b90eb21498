//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS, GEO_TIMEOUT_SECS, HTTPS_PORT, HTTP_PROBE_TIMEOUT_SECS,
    IPINFO_BASE_URL, IPWHO_BASE_URL, IP_API_BASE_URL, TCP_CONNECT_TIMEOUT_SECS,
    TLS_HANDSHAKE_TIMEOUT_SECS, TOR_BULK_EXIT_LIST_URL, TOR_FETCH_TIMEOUT_SECS,
    TOR_REFRESH_INTERVAL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Geolocation providers with a built-in adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum GeoProviderKind {
    /// ip-api.com (reports proxy/hosting flags)
    IpApi,
    /// ipwho.is
    Ipwho,
    /// ipinfo.io
    Ipinfo,
}

impl GeoProviderKind {
    /// Public endpoint used when no base URL override is configured.
    pub fn default_base_url(self) -> &'static str {
        match self {
            GeoProviderKind::IpApi => IP_API_BASE_URL,
            GeoProviderKind::Ipwho => IPWHO_BASE_URL,
            GeoProviderKind::Ipinfo => IPINFO_BASE_URL,
        }
    }
}

/// One entry of the geolocation provider chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoProviderConfig {
    /// Which adapter normalizes the response
    pub kind: GeoProviderKind,
    /// Base URL the adapter builds its request from
    pub base_url: String,
}

impl GeoProviderConfig {
    /// Provider entry pointing at its public endpoint.
    pub fn new(kind: GeoProviderKind) -> Self {
        Self {
            kind,
            base_url: kind.default_base_url().to_string(),
        }
    }

    /// Provider entry pointing at a custom endpoint (mirrors, test servers).
    pub fn with_base_url(kind: GeoProviderKind, base_url: impl Into<String>) -> Self {
        Self {
            kind,
            base_url: base_url.into(),
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use target_recon::Config;
/// use std::time::Duration;
///
/// let config = Config {
///     http_timeout: Duration::from_secs(4),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// HTTP User-Agent header value for provider, Tor list and probe requests
    pub user_agent: String,

    /// Nameservers to query; empty uses the resolver defaults
    pub dns_servers: Vec<SocketAddr>,

    /// Timeout applied to each DNS query
    pub dns_timeout: Duration,

    /// Ordered geolocation provider chain
    pub geo_providers: Vec<GeoProviderConfig>,

    /// Timeout applied to each provider request
    pub geo_timeout: Duration,

    /// Tor bulk exit list URL
    pub tor_list_url: String,

    /// Minimum age of the Tor exit set before it is refreshed
    pub tor_refresh_interval: Duration,

    /// Timeout for the Tor list download
    pub tor_fetch_timeout: Duration,

    /// Port probed by the TLS inspector and HTTP probe
    pub https_port: u16,

    /// TCP connect timeout for the TLS inspector
    pub tcp_connect_timeout: Duration,

    /// TLS handshake timeout
    pub tls_handshake_timeout: Duration,

    /// HTTP reachability probe timeout
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            dns_servers: Vec::new(),
            dns_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            geo_providers: vec![
                GeoProviderConfig::new(GeoProviderKind::IpApi),
                GeoProviderConfig::new(GeoProviderKind::Ipwho),
                GeoProviderConfig::new(GeoProviderKind::Ipinfo),
            ],
            geo_timeout: Duration::from_secs(GEO_TIMEOUT_SECS),
            tor_list_url: TOR_BULK_EXIT_LIST_URL.to_string(),
            tor_refresh_interval: TOR_REFRESH_INTERVAL,
            tor_fetch_timeout: Duration::from_secs(TOR_FETCH_TIMEOUT_SECS),
            https_port: HTTPS_PORT,
            tcp_connect_timeout: Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
            tls_handshake_timeout: Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
            http_timeout: Duration::from_secs(HTTP_PROBE_TIMEOUT_SECS),
        }
    }
}

/// Command-line options for the `target_recon` binary.
#[derive(Debug, Parser)]
#[command(
    name = "target_recon",
    version,
    about = "Builds a reconnaissance and risk report for one IP address or hostname"
)]
pub struct Cli {
    /// IP address or hostname to investigate
    pub target: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Geolocation provider chain, in priority order (repeatable)
    #[arg(long = "geo-provider", value_enum)]
    pub geo_providers: Vec<GeoProviderKind>,

    /// Nameserver to query instead of the defaults (repeatable, ip:port)
    #[arg(long = "dns-server")]
    pub dns_servers: Vec<SocketAddr>,

    /// Tor bulk exit list URL
    #[arg(long, default_value = TOR_BULK_EXIT_LIST_URL)]
    pub tor_list_url: String,

    /// HTTP reachability probe timeout in seconds
    #[arg(long, default_value_t = HTTP_PROBE_TIMEOUT_SECS)]
    pub http_timeout_seconds: u64,

    /// Per-provider geolocation timeout in seconds
    #[arg(long, default_value_t = GEO_TIMEOUT_SECS)]
    pub geo_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Print the report as compact single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        let defaults = Config::default();
        let geo_providers = if cli.geo_providers.is_empty() {
            defaults.geo_providers.clone()
        } else {
            cli.geo_providers
                .iter()
                .copied()
                .map(GeoProviderConfig::new)
                .collect()
        };

        Config {
            log_level: cli.log_level.clone(),
            log_format: cli.log_format.clone(),
            user_agent: cli.user_agent.clone(),
            dns_servers: cli.dns_servers.clone(),
            geo_providers,
            geo_timeout: Duration::from_secs(cli.geo_timeout_seconds),
            tor_list_url: cli.tor_list_url.clone(),
            http_timeout: Duration::from_secs(cli.http_timeout_seconds),
            ..defaults
        }
    }
}
