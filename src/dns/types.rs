//! DNS data structures.

use std::net::IpAddr;

use serde::Serialize;

/// Address used for geolocation and Tor lookups.
///
/// `degraded` marks a hostname that failed to resolve and is carried forward
/// as-is; downstream lookups against it are expected to fail gracefully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedAddress {
    /// IP address, or the original hostname when degraded
    pub address: String,
    /// True when resolution failed
    pub degraded: bool,
}

impl ResolvedAddress {
    pub(crate) fn from_ip(ip: IpAddr) -> Self {
        Self {
            address: ip.to_string(),
            degraded: false,
        }
    }

    pub(crate) fn degraded(host: &str) -> Self {
        Self {
            address: host.to_string(),
            degraded: true,
        }
    }

    /// Parsed IP when resolution succeeded.
    pub fn ip(&self) -> Option<IpAddr> {
        if self.degraded {
            None
        } else {
            self.address.parse().ok()
        }
    }
}

/// DNS record sets for a hostname plus derived mail/DNSSEC flags.
///
/// Each record type is independent: an empty vector means the type had no
/// records or its lookup failed, never that the whole collection failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DnsIntel {
    /// IPv4 addresses
    pub a: Vec<String>,
    /// IPv6 addresses
    pub aaaa: Vec<String>,
    /// Mail exchangers as `"<preference> <exchange>"`, lowest preference first
    pub mx: Vec<String>,
    /// Nameservers
    pub ns: Vec<String>,
    /// TXT strings (multi-string records joined)
    pub txt: Vec<String>,
    /// Delegation signer records
    pub ds: Vec<String>,
    /// First SPF record found
    pub spf_record: Option<String>,
    /// First DMARC record found (apex or `_dmarc` subdomain)
    pub dmarc_record: Option<String>,
    /// At least one TXT record carries `v=spf`
    pub has_spf: bool,
    /// A DMARC record was found
    pub has_dmarc: bool,
    /// At least one DS record exists
    pub has_dnssec: bool,
}
