use serde::Serialize;
use strum_macros::EnumIter;

/// Cloud or hosting provider inferred from the organization/ISP string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter)]
#[allow(missing_docs)] // Variant names are the provider names
pub enum CloudProvider {
    #[serde(rename = "AWS")]
    Aws,
    #[serde(rename = "GCP")]
    Gcp,
    Azure,
    Cloudflare,
    DigitalOcean,
    #[serde(rename = "OVH")]
    Ovh,
    Linode,
    Hetzner,
    Vultr,
    Oracle,
    Alibaba,
    /// No rule matched, or no geolocation record
    Unknown,
}

impl CloudProvider {
    /// Display label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Gcp => "GCP",
            CloudProvider::Azure => "Azure",
            CloudProvider::Cloudflare => "Cloudflare",
            CloudProvider::DigitalOcean => "DigitalOcean",
            CloudProvider::Ovh => "OVH",
            CloudProvider::Linode => "Linode",
            CloudProvider::Hetzner => "Hetzner",
            CloudProvider::Vultr => "Vultr",
            CloudProvider::Oracle => "Oracle",
            CloudProvider::Alibaba => "Alibaba",
            CloudProvider::Unknown => "Unknown",
        }
    }

    /// True for every label except `Unknown`.
    pub fn is_identified(&self) -> bool {
        *self != CloudProvider::Unknown
    }
}

impl std::fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Likelihood that the address belongs to a VPN, proxy or datacenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VpnLikelihood {
    /// Provider flag set or datacenter/VPN network
    High,
    /// Geolocation available, nothing matched
    Low,
    /// No geolocation record was available
    Unknown,
}

/// Honeypot score bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HoneypotVerdict {
    /// Score 60 or above
    #[serde(rename = "Likely Honeypot")]
    LikelyHoneypot,
    /// Score 35 to 59
    Suspicious,
    /// Score below 35
    #[serde(rename = "Likely Active Service")]
    LikelyActiveService,
}

impl HoneypotVerdict {
    /// Buckets a 0-100 score: 60 and above, 35 to 59, below 35.
    pub fn from_score(score: u8) -> Self {
        match score {
            60..=u8::MAX => HoneypotVerdict::LikelyHoneypot,
            35..=59 => HoneypotVerdict::Suspicious,
            _ => HoneypotVerdict::LikelyActiveService,
        }
    }

    /// Display label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            HoneypotVerdict::LikelyHoneypot => "Likely Honeypot",
            HoneypotVerdict::Suspicious => "Suspicious",
            HoneypotVerdict::LikelyActiveService => "Likely Active Service",
        }
    }
}

/// Honeypot score with its verdict and one reason per triggered condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoneypotAssessment {
    /// 0-100
    pub score: u8,
    /// Bucket for `score`
    pub verdict: HoneypotVerdict,
    /// Human-readable trigger descriptions
    pub reasons: Vec<String>,
}

/// All derived risk signals for one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    /// Cloud provider label
    pub cloud: CloudProvider,
    /// VPN/proxy likelihood
    pub vpn_likelihood: VpnLikelihood,
    /// Honeypot score, verdict and reasons
    pub honeypot: HoneypotAssessment,
    /// 0-100, higher is cleaner
    pub confidence: u8,
}
