//! DNS intelligence collection for hostname targets.
//!
//! Six typed lookups (plus the `_dmarc` subdomain) run concurrently, each with
//! its own timeout. A failure on one record type empties that type only.

use std::future::Future;
use std::time::Duration;

use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::{ErrorType, ProcessingStats};

use super::extract::{extract_dmarc_record, extract_spf_record};
use super::records::{
    lookup_a_records, lookup_aaaa_records, lookup_ds_records, lookup_mx_records,
    lookup_ns_records, lookup_txt_records,
};
use super::types::DnsIntel;

/// Awaits one record lookup under `timeout`, mapping any failure to empty.
async fn bounded<T, F>(
    label: &str,
    domain: &str,
    timeout: Duration,
    stats: &ProcessingStats,
    lookup: F,
) -> Vec<T>
where
    F: Future<Output = anyhow::Result<Vec<T>>>,
{
    match tokio::time::timeout(timeout, lookup).await {
        Ok(Ok(records)) => records,
        Ok(Err(e)) => {
            log::debug!("{label} lookup for {domain} failed: {e}");
            stats.increment_error(ErrorType::DnsRecordLookupError);
            Vec::new()
        }
        Err(_) => {
            log::warn!("{label} lookup for {domain} timed out");
            stats.increment_error(ErrorType::SourceTimeout);
            Vec::new()
        }
    }
}

/// Collects A, AAAA, MX, NS, TXT and DS records for `domain`.
///
/// No retries: a single attempt per record type. SPF is derived from the apex
/// TXT set; DMARC from the apex set, falling back to `_dmarc.<domain>`.
pub async fn collect_dns_intel(
    domain: &str,
    resolver: &TokioAsyncResolver,
    timeout: Duration,
    stats: &ProcessingStats,
) -> DnsIntel {
    let dmarc_domain = format!("_dmarc.{domain}");
    let (a, aaaa, mx, ns, txt, ds, dmarc_txt) = tokio::join!(
        bounded("A", domain, timeout, stats, lookup_a_records(domain, resolver)),
        bounded("AAAA", domain, timeout, stats, lookup_aaaa_records(domain, resolver)),
        bounded("MX", domain, timeout, stats, lookup_mx_records(domain, resolver)),
        bounded("NS", domain, timeout, stats, lookup_ns_records(domain, resolver)),
        bounded("TXT", domain, timeout, stats, lookup_txt_records(domain, resolver)),
        bounded("DS", domain, timeout, stats, lookup_ds_records(domain, resolver)),
        // Absence under _dmarc is the common case, so failures are not counted
        async {
            tokio::time::timeout(timeout, lookup_txt_records(&dmarc_domain, resolver))
                .await
                .ok()
                .and_then(|r| r.ok())
                .unwrap_or_default()
        },
    );

    log::debug!(
        "DNS records for {domain}: {} A, {} AAAA, {} MX, {} NS, {} TXT, {} DS",
        a.len(),
        aaaa.len(),
        mx.len(),
        ns.len(),
        txt.len(),
        ds.len()
    );

    let spf_record = extract_spf_record(&txt);
    let dmarc_record = extract_dmarc_record(&txt).or_else(|| extract_dmarc_record(&dmarc_txt));

    DnsIntel {
        a,
        aaaa,
        mx: mx
            .into_iter()
            .map(|(preference, exchange)| format!("{preference} {exchange}"))
            .collect(),
        ns,
        has_dnssec: !ds.is_empty(),
        ds,
        has_spf: spf_record.is_some(),
        has_dmarc: dmarc_record.is_some(),
        spf_record,
        dmarc_record,
        txt,
    }
}
