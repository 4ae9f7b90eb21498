//! Error type definitions.
//!
//! This module defines the fatal error types surfaced to callers and the
//! categories of recoverable source failures tracked during report assembly.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing an HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Fatal errors returned by report production.
///
/// Only input problems are fatal; every external source failure degrades to
/// an absent field instead.
#[derive(Error, Debug)]
pub enum ReconError {
    /// The target was empty or whitespace only.
    #[error("Target is empty")]
    EmptyTarget,

    /// The target is neither an IP literal nor a syntactically valid hostname.
    #[error("Target '{0}' is not an IP address or hostname")]
    MalformedTarget(String),

    /// Engine resources could not be created.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

/// Categories of recoverable source failures.
///
/// Each variant maps to one external source that degraded to an absent
/// value while a report was assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // DNS
    /// Hostname did not resolve; lookups continued with the hostname
    DnsResolutionDegraded,
    /// PTR lookup failed
    DnsReverseLookupError,
    /// One typed record lookup failed
    DnsRecordLookupError,
    // Geolocation
    /// One provider in the chain failed or returned an incomplete record
    GeoProviderError,
    /// Every provider in the chain failed
    GeoChainExhausted,
    // Tor
    /// Exit list could not be fetched; the previous set was kept
    TorListRefreshError,
    // Probes
    /// TLS connect or handshake failed
    TlsInspectionError,
    /// HTTPS request got no response
    HttpProbeError,
    /// A source branch was cut off by its timeout
    SourceTimeout,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsResolutionDegraded => "DNS resolution degraded",
            ErrorType::DnsReverseLookupError => "DNS reverse lookup error",
            ErrorType::DnsRecordLookupError => "DNS record lookup error",
            ErrorType::GeoProviderError => "Geolocation provider error",
            ErrorType::GeoChainExhausted => "Geolocation chain exhausted",
            ErrorType::TorListRefreshError => "Tor exit list refresh error",
            ErrorType::TlsInspectionError => "TLS inspection error",
            ErrorType::HttpProbeError => "HTTP probe error",
            ErrorType::SourceTimeout => "Source timeout",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_type_as_str_is_unique() {
        let names: std::collections::HashSet<&str> =
            ErrorType::iter().map(|e| e.as_str()).collect();
        assert_eq!(names.len(), ErrorType::iter().count());
    }

    #[test]
    fn test_error_type_display_matches_as_str() {
        for error_type in ErrorType::iter() {
            assert_eq!(error_type.to_string(), error_type.as_str());
        }
    }

    #[test]
    fn test_recon_error_messages() {
        assert_eq!(ReconError::EmptyTarget.to_string(), "Target is empty");
        let err = ReconError::MalformedTarget("http://x".to_string());
        assert!(err.to_string().contains("http://x"));
    }
}
