//! Typed DNS record queries (A, AAAA, MX, NS, TXT, DS).
//!
//! Every query distinguishes "no records" (an empty vector) from real
//! failures (timeouts, network errors), which are returned as errors so the
//! caller can record them.

use anyhow::{Error, Result};
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

/// Runs one typed lookup and renders each matching record.
///
/// `render` returns `None` for records of other types (e.g. a CNAME in the
/// answer chain), which are skipped.
async fn lookup_rendered<F>(
    domain: &str,
    record_type: RecordType,
    resolver: &TokioAsyncResolver,
    render: F,
) -> Result<Vec<String>>
where
    F: Fn(&RData) -> Option<String>,
{
    match resolver.lookup(domain, record_type).await {
        Ok(lookup) => Ok(lookup.iter().filter_map(render).collect()),
        Err(e) => {
            // "no records found" covers both NOERROR/empty and NXDOMAIN
            if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
                Ok(Vec::new())
            } else {
                let error_msg = e.to_string();
                if error_msg.contains("timeout") || error_msg.contains("timed out") {
                    log::warn!("{record_type} record lookup timed out for {domain}: {e}");
                } else {
                    log::warn!("Failed to lookup {record_type} records for {domain}: {e}");
                }
                Err(Error::new(e))
            }
        }
    }
}

/// Queries A (IPv4 address) records for a domain.
pub async fn lookup_a_records(domain: &str, resolver: &TokioAsyncResolver) -> Result<Vec<String>> {
    lookup_rendered(domain, RecordType::A, resolver, |rdata| match rdata {
        RData::A(a) => Some(a.to_string()),
        _ => None,
    })
    .await
}

/// Queries AAAA (IPv6 address) records for a domain.
pub async fn lookup_aaaa_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>> {
    lookup_rendered(domain, RecordType::AAAA, resolver, |rdata| match rdata {
        RData::AAAA(aaaa) => Some(aaaa.to_string()),
        _ => None,
    })
    .await
}

/// Queries NS (nameserver) records for a domain.
pub async fn lookup_ns_records(domain: &str, resolver: &TokioAsyncResolver) -> Result<Vec<String>> {
    lookup_rendered(domain, RecordType::NS, resolver, |rdata| match rdata {
        RData::NS(ns) => Some(ns.to_utf8()),
        _ => None,
    })
    .await
}

/// Queries TXT (text) records for a domain.
///
/// TXT records can contain multiple character strings; they are joined.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>> {
    lookup_rendered(domain, RecordType::TXT, resolver, |rdata| match rdata {
        RData::TXT(txt) => Some(
            txt.iter()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                .collect::<Vec<String>>()
                .join(""),
        ),
        _ => None,
    })
    .await
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Returns
///
/// `(preference, exchange)` tuples sorted by preference (lower = higher priority).
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<(u16, String)>> {
    match resolver.lookup(domain, RecordType::MX).await {
        Ok(lookup) => {
            let mut mx_records: Vec<(u16, String)> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::MX(mx) = rdata {
                        Some((mx.preference(), mx.exchange().to_utf8()))
                    } else {
                        None
                    }
                })
                .collect();
            mx_records.sort_by_key(|(priority, _)| *priority);
            Ok(mx_records)
        }
        Err(e) => {
            if matches!(e.kind(), ResolveErrorKind::NoRecordsFound { .. }) {
                Ok(Vec::new())
            } else {
                log::warn!("Failed to lookup MX records for {domain}: {e}");
                Err(Error::new(e))
            }
        }
    }
}

/// Queries DS (delegation signer) records for a domain.
///
/// The resolver is built without DNSSEC validation, so DS data is rendered in
/// its presentation form; only presence matters downstream.
pub async fn lookup_ds_records(domain: &str, resolver: &TokioAsyncResolver) -> Result<Vec<String>> {
    lookup_rendered(domain, RecordType::DS, resolver, |rdata| match rdata {
        RData::CNAME(_) => None,
        other => Some(other.to_string()),
    })
    .await
}
