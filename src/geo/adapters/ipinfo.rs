//! ipinfo.io adapter.
//!
//! The free tier reports the country as an ISO code only, the ASN folded into
//! `org` (`"AS15169 Google LLC"`) and coordinates as a `"lat,lon"` string.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::geo::provider::GeoProvider;
use crate::geo::types::GeoRecord;

use super::{non_empty, require_country, split_as_field};

#[derive(Debug, Deserialize)]
struct IpinfoResponse {
    #[serde(default)]
    bogon: bool,
    error: Option<serde_json::Value>,
    hostname: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
    loc: Option<String>,
    org: Option<String>,
    postal: Option<String>,
    timezone: Option<String>,
    privacy: Option<IpinfoPrivacy>,
}

#[derive(Debug, Deserialize)]
struct IpinfoPrivacy {
    proxy: Option<bool>,
    hosting: Option<bool>,
}

/// Parses `"37.4056,-122.0775"`.
fn parse_loc(loc: &str) -> Option<(f64, f64)> {
    let (lat, lon) = loc.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}

/// Adapter for `GET {base}/{ip}/json`.
#[derive(Debug, Clone)]
pub struct IpinfoProvider {
    base_url: String,
}

impl IpinfoProvider {
    /// Creates the adapter against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl GeoProvider for IpinfoProvider {
    fn name(&self) -> &'static str {
        "ipinfo.io"
    }

    fn request_url(&self, ip: &str) -> String {
        format!("{}/{ip}/json", self.base_url)
    }

    fn normalize(&self, body: &str) -> Result<GeoRecord> {
        let response: IpinfoResponse =
            serde_json::from_str(body).context("Failed to decode ipinfo.io response")?;

        if let Some(error) = response.error {
            bail!("ipinfo.io lookup failed: {error}");
        }
        if response.bogon {
            bail!("ipinfo.io reports a bogon address");
        }

        let country_code = non_empty(response.country);
        require_country(self.name(), &country_code)?;

        let (asn, org) = response
            .org
            .as_deref()
            .map(split_as_field)
            .unwrap_or((None, None));
        let (latitude, longitude) = match response.loc.as_deref().and_then(parse_loc) {
            Some((lat, lon)) => (Some(lat), Some(lon)),
            None => (None, None),
        };
        let (is_proxy, is_hosting) = response
            .privacy
            .map(|p| (p.proxy.unwrap_or(false), p.hosting.unwrap_or(false)))
            .unwrap_or((false, false));

        Ok(GeoRecord {
            provider: self.name().to_string(),
            city: non_empty(response.city),
            region: non_empty(response.region),
            country: country_code.clone(),
            country_code,
            postal: non_empty(response.postal),
            latitude,
            longitude,
            timezone: non_empty(response.timezone),
            isp: None,
            asn,
            org,
            hostname: non_empty(response.hostname),
            is_proxy,
            is_hosting,
        })
    }
}
