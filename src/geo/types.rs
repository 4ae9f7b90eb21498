//! Geolocation data structures.

use serde::Serialize;

/// Provider-independent geolocation/ASN record.
///
/// Every adapter normalizes into this shape. `is_proxy` and `is_hosting` are
/// the provider's own booleans taken at face value; a provider that does not
/// report them yields an explicit `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeoRecord {
    /// Adapter that produced the record
    pub provider: String,
    /// City name
    pub city: Option<String>,
    /// Region or state
    pub region: Option<String>,
    /// Country name, or ISO code when the provider only reports the code
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 code
    pub country_code: Option<String>,
    /// Postal or ZIP code
    pub postal: Option<String>,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// IANA timezone name
    pub timezone: Option<String>,
    /// ISP name
    pub isp: Option<String>,
    /// Autonomous system, `AS<number>`
    pub asn: Option<String>,
    /// Organization string (often the AS holder)
    pub org: Option<String>,
    /// Provider-reported reverse DNS name
    pub hostname: Option<String>,
    /// Provider flags the address as a proxy or VPN
    pub is_proxy: bool,
    /// Provider flags the address as hosting/datacenter
    pub is_hosting: bool,
}

impl GeoRecord {
    /// Organization and ISP strings that are present, organization first.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.org
            .as_deref()
            .into_iter()
            .chain(self.isp.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// True when a non-empty city was reported.
    pub fn has_city(&self) -> bool {
        self.city.as_deref().is_some_and(|c| !c.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_names_order_and_filtering() {
        let record = GeoRecord {
            org: Some("Amazon.com, Inc.".to_string()),
            isp: Some("Amazon Technologies".to_string()),
            ..Default::default()
        };
        let names: Vec<&str> = record.network_names().collect();
        assert_eq!(names, vec!["Amazon.com, Inc.", "Amazon Technologies"]);

        let blank = GeoRecord {
            org: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(blank.network_names().count(), 0);
    }

    #[test]
    fn test_has_city() {
        assert!(!GeoRecord::default().has_city());
        let empty = GeoRecord {
            city: Some(String::new()),
            ..Default::default()
        };
        assert!(!empty.has_city());
        let city = GeoRecord {
            city: Some("Ashburn".to_string()),
            ..Default::default()
        };
        assert!(city.has_city());
    }
}
