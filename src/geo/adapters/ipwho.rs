//! ipwho.is adapter.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::geo::provider::GeoProvider;
use crate::geo::types::GeoRecord;

use super::{non_empty, require_country};

#[derive(Debug, Deserialize)]
struct IpwhoResponse {
    success: bool,
    message: Option<String>,
    country: Option<String>,
    country_code: Option<String>,
    region: Option<String>,
    city: Option<String>,
    postal: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    connection: Option<IpwhoConnection>,
    timezone: Option<IpwhoTimezone>,
    /// Only present on paid plans
    security: Option<IpwhoSecurity>,
}

#[derive(Debug, Deserialize)]
struct IpwhoConnection {
    asn: Option<u32>,
    org: Option<String>,
    isp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpwhoTimezone {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IpwhoSecurity {
    proxy: Option<bool>,
    hosting: Option<bool>,
}

/// Adapter for `GET {base}/{ip}`.
#[derive(Debug, Clone)]
pub struct IpwhoProvider {
    base_url: String,
}

impl IpwhoProvider {
    /// Creates the adapter against `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl GeoProvider for IpwhoProvider {
    fn name(&self) -> &'static str {
        "ipwho.is"
    }

    fn request_url(&self, ip: &str) -> String {
        format!("{}/{ip}", self.base_url)
    }

    fn normalize(&self, body: &str) -> Result<GeoRecord> {
        let response: IpwhoResponse =
            serde_json::from_str(body).context("Failed to decode ipwho.is response")?;

        if !response.success {
            bail!(
                "ipwho.is lookup failed: {}",
                response.message.as_deref().unwrap_or("unknown reason")
            );
        }

        let country = non_empty(response.country);
        require_country(self.name(), &country)?;

        let (asn, org, isp) = match response.connection {
            Some(c) => (
                c.asn.map(|n| format!("AS{n}")),
                non_empty(c.org),
                non_empty(c.isp),
            ),
            None => (None, None, None),
        };
        let (is_proxy, is_hosting) = response
            .security
            .map(|s| (s.proxy.unwrap_or(false), s.hosting.unwrap_or(false)))
            .unwrap_or((false, false));

        Ok(GeoRecord {
            provider: self.name().to_string(),
            city: non_empty(response.city),
            region: non_empty(response.region),
            country,
            country_code: non_empty(response.country_code),
            postal: non_empty(response.postal),
            latitude: response.latitude,
            longitude: response.longitude,
            timezone: response.timezone.and_then(|tz| non_empty(tz.id)),
            isp,
            asn,
            org,
            hostname: None,
            is_proxy,
            is_hosting,
        })
    }
}
