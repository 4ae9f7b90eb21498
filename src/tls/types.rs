use chrono::{DateTime, Utc};
use serde::Serialize;

/// Metadata of the leaf certificate presented during the handshake.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TlsCertificateInfo {
    /// Negotiated protocol, e.g. `TLSv1_3`
    pub protocol_version: String,
    /// Negotiated cipher suite
    pub cipher_suite: Option<String>,
    /// Issuer organization (O)
    pub issuer_org: Option<String>,
    /// Full issuer distinguished name
    pub issuer: String,
    /// Full subject distinguished name
    pub subject: String,
    /// Subject common name (CN)
    pub subject_cn: Option<String>,
    /// Start of validity
    pub valid_from: DateTime<Utc>,
    /// End of validity
    pub valid_to: DateTime<Utc>,
    /// DNS and IP SAN entries
    pub subject_alternative_names: Vec<String>,
    /// Issuer equals subject
    pub self_signed: bool,
    /// Subject CN starts with `*`
    pub wildcard: bool,
}
