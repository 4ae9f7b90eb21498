//! Certificate field extraction.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use x509_parser::certificate::X509Certificate;
use x509_parser::extensions::{GeneralName, ParsedExtension};
use x509_parser::time::ASN1Time;
use x509_parser::x509::X509Name;

/// Subject Alternative Names: DNS names and IP addresses, in certificate order.
pub(crate) fn extract_certificate_sans(cert: &X509Certificate<'_>) -> Vec<String> {
    let mut sans = Vec::new();

    for ext in cert.extensions() {
        if let ParsedExtension::SubjectAlternativeName(san) = ext.parsed_extension() {
            for general_name in &san.general_names {
                match general_name {
                    GeneralName::DNSName(dns_name) => sans.push(dns_name.to_string()),
                    GeneralName::IPAddress(bytes) => {
                        if let Some(ip) = ip_from_bytes(bytes) {
                            sans.push(ip);
                        }
                    }
                    _ => {}
                }
            }
        }
    }

    sans
}

fn ip_from_bytes(bytes: &[u8]) -> Option<String> {
    match bytes.len() {
        4 => {
            let octets: [u8; 4] = bytes.try_into().ok()?;
            Some(std::net::Ipv4Addr::from(octets).to_string())
        }
        16 => {
            let octets: [u8; 16] = bytes.try_into().ok()?;
            Some(std::net::Ipv6Addr::from(octets).to_string())
        }
        _ => None,
    }
}

/// First organization (O) attribute of a name.
pub(crate) fn first_organization(name: &X509Name<'_>) -> Option<String> {
    name.iter_organization()
        .next()
        .and_then(|attr| attr.as_str().ok())
        .map(str::to_string)
}

/// First common name (CN) attribute of a name.
pub(crate) fn first_common_name(name: &X509Name<'_>) -> Option<String> {
    name.iter_common_name()
        .next()
        .and_then(|attr| attr.as_str().ok())
        .map(str::to_string)
}

pub(crate) fn asn1_to_utc(time: &ASN1Time) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(time.timestamp(), 0)
        .ok_or_else(|| anyhow!("Certificate time out of range: {time}"))
}

/// Issuer and subject distinguished names are identical.
pub(crate) fn is_self_signed(issuer: &str, subject: &str) -> bool {
    issuer == subject
}

/// Subject CN is a wildcard name.
pub(crate) fn is_wildcard(subject_cn: Option<&str>) -> bool {
    subject_cn.is_some_and(|cn| cn.starts_with('*'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_self_signed() {
        assert!(is_self_signed("CN=localhost", "CN=localhost"));
        assert!(!is_self_signed("C=US, O=Let's Encrypt, CN=R3", "CN=example.com"));
    }

    #[test]
    fn test_is_wildcard() {
        assert!(is_wildcard(Some("*.example.com")));
        assert!(!is_wildcard(Some("www.example.com")));
        assert!(!is_wildcard(None));
    }

    #[test]
    fn test_ip_from_bytes() {
        assert_eq!(ip_from_bytes(&[192, 0, 2, 1]).as_deref(), Some("192.0.2.1"));
        let mut v6 = [0u8; 16];
        v6[15] = 1;
        assert_eq!(ip_from_bytes(&v6).as_deref(), Some("::1"));
        assert_eq!(ip_from_bytes(&[1, 2, 3]), None);
    }

    #[test]
    fn test_asn1_to_utc() {
        let time = ASN1Time::from_timestamp(1_700_000_000).unwrap();
        let utc = asn1_to_utc(&time).unwrap();
        assert_eq!(utc.timestamp(), 1_700_000_000);
    }
}
