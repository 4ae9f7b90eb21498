//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver for forward, reverse and typed record lookups.
///
/// Uses the default upstream configuration (Google DNS) unless
/// `config.dns_servers` names explicit nameservers. A single attempt is made
/// per query: the engine never retries a source within one report.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the nameserver list is
/// inconsistent (mixed ports cannot be expressed in one group).
pub fn init_resolver(config: &Config) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    let mut opts = ResolverOpts::default();
    opts.timeout = config.dns_timeout;
    opts.attempts = 1;
    // No search domain appending
    opts.ndots = 0;

    let resolver_config = if config.dns_servers.is_empty() {
        ResolverConfig::default()
    } else {
        let port = config.dns_servers[0].port();
        if config.dns_servers.iter().any(|addr| addr.port() != port) {
            return Err(InitializationError::DnsResolverError(
                "all --dns-server entries must use the same port".to_string(),
            ));
        }
        let ips: Vec<std::net::IpAddr> = config.dns_servers.iter().map(|a| a.ip()).collect();
        // Explicit servers bypass /etc/hosts so answers come only from them
        opts.use_hosts_file = false;
        ResolverConfig::from_parts(
            None,
            Vec::new(),
            NameServerConfigGroup::from_ips_clear(&ips, port, true),
        )
    };

    Ok(Arc::new(TokioAsyncResolver::tokio(resolver_config, opts)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[tokio::test]
    async fn test_init_resolver_defaults() {
        let resolver = init_resolver(&Config::default());
        assert!(resolver.is_ok());
    }

    #[tokio::test]
    async fn test_init_resolver_custom_servers() {
        let config = Config {
            dns_servers: vec![
                "127.0.0.1:5353".parse::<SocketAddr>().unwrap(),
                "127.0.0.2:5353".parse::<SocketAddr>().unwrap(),
            ],
            ..Default::default()
        };
        assert!(init_resolver(&config).is_ok());
    }

    #[tokio::test]
    async fn test_init_resolver_rejects_mixed_ports() {
        let config = Config {
            dns_servers: vec![
                "127.0.0.1:53".parse::<SocketAddr>().unwrap(),
                "127.0.0.2:5353".parse::<SocketAddr>().unwrap(),
            ],
            ..Default::default()
        };
        assert!(matches!(
            init_resolver(&config),
            Err(InitializationError::DnsResolverError(_))
        ));
    }
}
