//! Report data structures.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dns::DnsIntel;
use crate::geo::GeoRecord;
use crate::probe::HttpProbeResult;
use crate::scoring::{CloudProvider, HoneypotAssessment, VpnLikelihood};
use crate::target::TargetKind;
use crate::tls::TlsCertificateInfo;

/// Wall time spent per source, in milliseconds.
///
/// `None` means the source was not queried for this target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(missing_docs)] // One field per source
pub struct SourceTimings {
    pub resolve_ms: u64,
    pub dns_ms: Option<u64>,
    pub reverse_dns_ms: Option<u64>,
    pub geo_ms: u64,
    /// Includes a list refresh when one was due
    pub tor_ms: u64,
    pub tls_ms: u64,
    pub http_ms: u64,
    /// Whole report, classification through scoring
    pub total_ms: u64,
}

/// Unified reconnaissance report for one target.
///
/// Every externally sourced field is independently optional. A report is
/// assembled once and never modified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    /// Normalized target
    pub target: String,
    /// IP literal or hostname
    pub target_kind: TargetKind,
    /// Address used for geolocation and Tor lookups
    pub resolved_address: String,
    /// Hostname could not be resolved and was carried forward as-is
    pub resolution_degraded: bool,
    /// PTR name of the resolved address
    pub reverse_dns: Option<String>,
    /// DNS records; hostname targets only
    pub dns: Option<DnsIntel>,
    /// First successful geolocation provider's record
    pub geo: Option<GeoRecord>,
    /// Address is a known Tor exit
    pub tor: bool,
    /// Leaf certificate presented on the HTTPS port
    pub tls: Option<TlsCertificateInfo>,
    /// HTTP probe received any response
    pub http: bool,
    /// Probe detail: status, server and headers
    pub http_probe: HttpProbeResult,
    /// Cloud provider label
    pub cloud: CloudProvider,
    /// VPN/proxy likelihood
    pub vpn_likelihood: VpnLikelihood,
    /// Honeypot score, verdict and reasons
    pub honeypot: HoneypotAssessment,
    /// 0-100, distinct from the honeypot score
    pub confidence: u8,
    /// Per-source latency
    pub timings: SourceTimings,
    /// Assembly time
    pub timestamp: DateTime<Utc>,
}
