//! Ordered classification tables.
//!
//! All fragments are lower-case and matched as substrings of the lower-cased
//! organization/ISP string. In `CLOUD_RULES` the first matching row wins.

use super::types::CloudProvider;

/// Organization/ISP fragment to cloud provider label.
pub const CLOUD_RULES: &[(&str, CloudProvider)] = &[
    ("amazon", CloudProvider::Aws),
    ("aws", CloudProvider::Aws),
    ("google", CloudProvider::Gcp),
    ("azure", CloudProvider::Azure),
    ("microsoft", CloudProvider::Azure),
    ("cloudflare", CloudProvider::Cloudflare),
    ("digitalocean", CloudProvider::DigitalOcean),
    ("digital ocean", CloudProvider::DigitalOcean),
    ("ovh", CloudProvider::Ovh),
    ("linode", CloudProvider::Linode),
    ("akamai", CloudProvider::Linode),
    ("hetzner", CloudProvider::Hetzner),
    ("vultr", CloudProvider::Vultr),
    ("choopa", CloudProvider::Vultr),
    ("oracle", CloudProvider::Oracle),
    ("alibaba", CloudProvider::Alibaba),
    ("aliyun", CloudProvider::Alibaba),
];

/// VPS, bulk hosting and VPN brands checked in addition to `CLOUD_RULES`.
pub const DATACENTER_VPN_FRAGMENTS: &[&str] = &[
    // VPS and dedicated hosting
    "scaleway",
    "online s.a.s",
    "contabo",
    "leaseweb",
    "hostwinds",
    "interserver",
    "quadranet",
    "colocrossing",
    "frantech",
    "buyvm",
    "psychz",
    "sharktech",
    "krypt",
    "tzulo",
    "fdcservers",
    "servermania",
    "spinservers",
    "serverius",
    "datacamp",
    "m247",
    "tencent",
    "hosting",
    "datacenter",
    "data center",
    // VPN brands
    "vpn",
    "mullvad",
    "private internet access",
    "surfshark",
    "cyberghost",
    "ipvanish",
    "windscribe",
    "proton ag",
    "hide.me",
    "torguard",
];

/// PTR substrings typical of generic infrastructure naming.
pub const GENERIC_PTR_FRAGMENTS: &[&str] = &["static", "compute", "scan"];

/// First cloud label whose fragment occurs in `name`.
pub fn match_cloud(name: &str) -> Option<CloudProvider> {
    let lower = name.to_lowercase();
    CLOUD_RULES
        .iter()
        .find(|(fragment, _)| lower.contains(fragment))
        .map(|(_, provider)| *provider)
}

/// True when `name` matches a cloud fragment or a datacenter/VPN fragment.
pub fn matches_datacenter_or_vpn(name: &str) -> bool {
    let lower = name.to_lowercase();
    CLOUD_RULES
        .iter()
        .map(|(fragment, _)| *fragment)
        .chain(DATACENTER_VPN_FRAGMENTS.iter().copied())
        .any(|fragment| lower.contains(fragment))
}

/// First generic-infrastructure fragment found in a PTR hostname.
pub fn match_generic_ptr(hostname: &str) -> Option<&'static str> {
    let lower = hostname.to_lowercase();
    GENERIC_PTR_FRAGMENTS
        .iter()
        .copied()
        .find(|fragment| lower.contains(fragment))
}
