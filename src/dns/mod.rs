//! DNS resolution and record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Target resolution with graceful degradation
//! - Reverse (PTR) lookups
//! - Typed record queries (A, AAAA, MX, NS, TXT, DS)
//! - SPF/DMARC/DNSSEC flag derivation

mod extract;
mod intel;
mod records;
mod resolution;
mod types;

// Re-export public API
pub use extract::{extract_dmarc_record, extract_spf_record};
pub use intel::collect_dns_intel;
pub use records::{
    lookup_a_records, lookup_aaaa_records, lookup_ds_records, lookup_mx_records,
    lookup_ns_records, lookup_txt_records,
};
pub use resolution::{resolve_host_to_ip, resolve_target, reverse_dns_lookup};
pub use types::{DnsIntel, ResolvedAddress};
