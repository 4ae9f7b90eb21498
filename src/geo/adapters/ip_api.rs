//! ip-api.com adapter (primary provider; reports proxy and hosting flags).

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::config::IP_API_FIELDS;
use crate::geo::provider::GeoProvider;
use crate::geo::types::GeoRecord;

use super::{non_empty, require_country, split_as_field};

/// ip-api.com JSON response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    region_name: Option<String>,
    city: Option<String>,
    zip: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    timezone: Option<String>,
    isp: Option<String>,
    org: Option<String>,
    #[serde(rename = "as")]
    as_field: Option<String>,
    reverse: Option<String>,
    proxy: Option<bool>,
    hosting: Option<bool>,
}

/// Adapter for `GET {base}/json/{ip}?fields=...`.
#[derive(Debug, Clone)]
pub struct IpApiProvider {
    base_url: String,
}

impl IpApiProvider {
    /// Creates the adapter against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl GeoProvider for IpApiProvider {
    fn name(&self) -> &'static str {
        "ip-api.com"
    }

    fn request_url(&self, ip: &str) -> String {
        format!("{}/json/{ip}?fields={IP_API_FIELDS}", self.base_url)
    }

    fn normalize(&self, body: &str) -> Result<GeoRecord> {
        let response: IpApiResponse =
            serde_json::from_str(body).context("Failed to decode ip-api.com response")?;

        if response.status != "success" {
            bail!(
                "ip-api.com lookup failed: {}",
                response.message.as_deref().unwrap_or("unknown reason")
            );
        }

        let country = non_empty(response.country);
        require_country(self.name(), &country)?;

        // Prefer the `as` field for the ASN; `org` is the network operator
        let (asn, as_name) = response
            .as_field
            .as_deref()
            .map(split_as_field)
            .unwrap_or((None, None));

        Ok(GeoRecord {
            provider: self.name().to_string(),
            city: non_empty(response.city),
            region: non_empty(response.region_name),
            country,
            country_code: non_empty(response.country_code),
            postal: non_empty(response.zip),
            latitude: response.lat,
            longitude: response.lon,
            timezone: non_empty(response.timezone),
            isp: non_empty(response.isp),
            asn,
            org: non_empty(response.org).or(as_name),
            hostname: non_empty(response.reverse),
            is_proxy: response.proxy.unwrap_or(false),
            is_hosting: response.hosting.unwrap_or(false),
        })
    }
}
