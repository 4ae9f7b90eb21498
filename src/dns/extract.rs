//! DNS record extraction utilities.
//!
//! Finds SPF/DMARC records in TXT record collections.

/// Extracts the first SPF record from TXT records.
///
/// Matching is case-insensitive on the `v=spf` marker.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.to_ascii_lowercase().contains("v=spf"))
        .map(|s| s.trim().to_string())
}

/// Extracts the first DMARC record from TXT records.
///
/// Matching is case-insensitive on the `dmarc` marker. Apex TXT sets rarely
/// carry DMARC; the collector also consults `_dmarc.<domain>`.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.to_ascii_lowercase().contains("dmarc"))
        .map(|s| s.trim().to_string())
}
