// Shared test helpers for hermetic engine configuration.
//
// Every source is pointed at a local endpoint: a dead DNS server, wiremock
// servers for geolocation and the Tor list, and a closed port for TLS/HTTP.

use std::time::Duration;

use target_recon::{Config, GeoProviderConfig, GeoProviderKind};

/// Returns a local port with nothing listening on it.
pub async fn closed_port() -> u16 {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    listener
        .local_addr()
        .expect("Failed to read local address")
        .port()
}

/// Geolocation chain with every built-in adapter pointed at `base_url`.
#[allow(dead_code)] // Used by other test files
pub fn all_providers_at(base_url: &str) -> Vec<GeoProviderConfig> {
    vec![
        GeoProviderConfig::with_base_url(GeoProviderKind::IpApi, base_url),
        GeoProviderConfig::with_base_url(GeoProviderKind::Ipwho, base_url),
        GeoProviderConfig::with_base_url(GeoProviderKind::Ipinfo, base_url),
    ]
}

/// Config with short timeouts and no dependency on the outside network.
#[allow(dead_code)] // Used by other test files
pub async fn hermetic_config(
    geo_providers: Vec<GeoProviderConfig>,
    tor_list_url: String,
) -> Config {
    Config {
        dns_servers: vec!["127.0.0.1:9".parse().expect("valid socket address")],
        dns_timeout: Duration::from_millis(500),
        geo_providers,
        geo_timeout: Duration::from_secs(2),
        tor_list_url,
        tor_fetch_timeout: Duration::from_secs(2),
        https_port: closed_port().await,
        tcp_connect_timeout: Duration::from_secs(1),
        tls_handshake_timeout: Duration::from_secs(1),
        http_timeout: Duration::from_secs(1),
        ..Default::default()
    }
}
