//! Concrete provider adapters and shared normalization helpers.

mod ip_api;
mod ipinfo;
mod ipwho;

pub use ip_api::IpApiProvider;
pub use ipinfo::IpinfoProvider;
pub use ipwho::IpwhoProvider;

use anyhow::{bail, Result};

use crate::config::{GeoProviderConfig, GeoProviderKind};

use super::provider::GeoProvider;

/// Builds the adapter for a configured provider.
pub fn build_provider(config: &GeoProviderConfig) -> Box<dyn GeoProvider> {
    let base = config.base_url.trim_end_matches('/').to_string();
    match config.kind {
        GeoProviderKind::IpApi => Box::new(IpApiProvider::new(base)),
        GeoProviderKind::Ipwho => Box::new(IpwhoProvider::new(base)),
        GeoProviderKind::Ipinfo => Box::new(IpinfoProvider::new(base)),
    }
}

/// Drops empty and whitespace-only strings.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits an `"AS15169 Google LLC"` style field into ASN and holder name.
pub(crate) fn split_as_field(value: &str) -> (Option<String>, Option<String>) {
    let value = value.trim();
    let (head, tail) = match value.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (value, ""),
    };
    // Byte slicing via `get` so a multi-byte first character cannot panic
    let digits = head.get(2..).unwrap_or("");
    let is_asn = head.get(..2).is_some_and(|prefix| prefix.eq_ignore_ascii_case("AS"))
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit());
    if is_asn {
        let name = (!tail.is_empty()).then(|| tail.to_string());
        (Some(head.to_ascii_uppercase()), name)
    } else if value.is_empty() {
        (None, None)
    } else {
        (None, Some(value.to_string()))
    }
}

/// Rejects records without a country; such payloads are treated as incomplete.
pub(crate) fn require_country(provider: &str, country: &Option<String>) -> Result<()> {
    if country.is_none() {
        bail!("{provider} response has no country");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_as_field() {
        assert_eq!(
            split_as_field("AS15169 Google LLC"),
            (Some("AS15169".to_string()), Some("Google LLC".to_string()))
        );
        assert_eq!(
            split_as_field("as13335"),
            (Some("AS13335".to_string()), None)
        );
        assert_eq!(
            split_as_field("Hetzner Online GmbH"),
            (None, Some("Hetzner Online GmbH".to_string()))
        );
        assert_eq!(split_as_field("  "), (None, None));
        assert_eq!(split_as_field("ASN"), (None, Some("ASN".to_string())));
    }

    #[test]
    fn test_split_as_field_non_ascii_holder() {
        assert_eq!(
            split_as_field("€uroNet Hosting"),
            (None, Some("€uroNet Hosting".to_string()))
        );
        assert_eq!(split_as_field("Aé"), (None, Some("Aé".to_string())));
        assert_eq!(
            split_as_field("AS64500 Ünitel Ağ"),
            (Some("AS64500".to_string()), Some("Ünitel Ağ".to_string()))
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_build_provider_trims_trailing_slash() {
        let config =
            GeoProviderConfig::with_base_url(GeoProviderKind::Ipinfo, "http://localhost:1234/");
        let provider = build_provider(&config);
        assert_eq!(provider.name(), "ipinfo.io");
        assert_eq!(
            provider.request_url("1.1.1.1"),
            "http://localhost:1234/1.1.1.1/json"
        );
    }
}
