//! Address resolution and reverse DNS lookup.
//!
//! This module resolves a classified target to the address used for
//! geolocation and Tor lookups, and performs reverse (PTR) lookups.

use std::net::IpAddr;
use std::time::Duration;

use anyhow::{Error, Result};
use hickory_resolver::TokioAsyncResolver;

use crate::target::Target;

use super::types::ResolvedAddress;

/// Resolves a hostname to an IP address using DNS.
///
/// # Returns
///
/// The first IP address found, or an error if resolution fails.
///
/// # Errors
///
/// Returns an error if DNS resolution fails or no IP addresses are found.
pub async fn resolve_host_to_ip(host: &str, resolver: &TokioAsyncResolver) -> Result<IpAddr> {
    let response = resolver.lookup_ip(host).await.map_err(Error::new)?;
    response
        .iter()
        .next()
        .ok_or_else(|| Error::msg("No IP addresses found"))
}

/// Resolves a target to the address used by downstream sources.
///
/// IP literals are returned unchanged without touching the resolver. For
/// hostnames the forward lookup is bounded by `timeout`; NXDOMAIN, timeouts
/// and network errors all degrade to the original hostname string.
pub async fn resolve_target(
    target: &Target,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
) -> ResolvedAddress {
    if let Some(ip) = target.ip() {
        return ResolvedAddress::from_ip(ip);
    }

    let host = target.as_str();
    match tokio::time::timeout(timeout, resolve_host_to_ip(host, resolver)).await {
        Ok(Ok(ip)) => {
            log::debug!("Resolved {host} to {ip}");
            ResolvedAddress::from_ip(ip)
        }
        Ok(Err(e)) => {
            log::warn!("Failed to resolve {host}, continuing with the hostname: {e}");
            ResolvedAddress::degraded(host)
        }
        Err(_) => {
            log::warn!(
                "DNS resolution timeout for {host} ({}s), continuing with the hostname",
                timeout.as_secs()
            );
            ResolvedAddress::degraded(host)
        }
    }
}

/// Performs a reverse DNS lookup (PTR record) for an IP address.
///
/// # Returns
///
/// The reverse DNS name without its trailing dot, or `None` if the lookup
/// fails or returns no names.
///
/// # Errors
///
/// Returns an error only when `ip` is not an IP address.
pub async fn reverse_dns_lookup(ip: &str, resolver: &TokioAsyncResolver) -> Result<Option<String>> {
    let addr: IpAddr = ip.parse()?;
    match resolver.reverse_lookup(addr).await {
        Ok(response) => {
            let name = response
                .iter()
                .next()
                .map(|name| name.to_utf8().trim_end_matches('.').to_string());
            Ok(name)
        }
        Err(e) => {
            log::debug!("Failed to perform reverse DNS lookup for {ip}: {e}");
            Ok(None)
        }
    }
}
