//! Risk scoring.
//!
//! Pure functions over the collected signals. Nothing here performs I/O, so the
//! whole model is testable without a network.
//!
//! - Cloud label: first matching row of [`rules::CLOUD_RULES`]
//! - VPN likelihood: provider flags or datacenter/VPN fragment match
//! - Honeypot score: fixed increments per condition, clamped to 100
//! - Confidence: 100 minus fixed deductions, floored at 0

pub mod rules;
mod types;

pub use types::{CloudProvider, HoneypotAssessment, HoneypotVerdict, RiskAssessment, VpnLikelihood};

use crate::geo::GeoRecord;

const HONEYPOT_CLOUD_POINTS: u8 = 20;
const HONEYPOT_PTR_POINTS: u8 = 20;
const HONEYPOT_UNREACHABLE_POINTS: u8 = 30;
const HONEYPOT_NO_CITY_POINTS: u8 = 10;
const HONEYPOT_MAX: u8 = 100;

const CONFIDENCE_PROXY_PENALTY: i32 = 25;
const CONFIDENCE_HOSTING_PENALTY: i32 = 20;
const CONFIDENCE_TOR_PENALTY: i32 = 40;
const CONFIDENCE_CLOUD_PENALTY: i32 = 10;

/// Signals the scoring model consumes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringInputs<'a> {
    /// Geolocation record, if any provider answered
    pub geo: Option<&'a GeoRecord>,
    /// PTR hostname from reverse DNS
    pub reverse_dns: Option<&'a str>,
    /// Address is in the Tor exit registry
    pub is_tor_exit: bool,
    /// HTTP probe received a response
    pub http_reachable: bool,
}

impl<'a> ScoringInputs<'a> {
    /// Reverse DNS name, falling back to the provider-reported hostname.
    pub fn ptr_hostname(&self) -> Option<&'a str> {
        self.reverse_dns
            .filter(|h| !h.is_empty())
            .or_else(|| self.geo.and_then(|g| g.hostname.as_deref()))
    }
}

/// Cloud label from the organization, then the ISP string.
pub fn classify_cloud(geo: Option<&GeoRecord>) -> CloudProvider {
    geo.into_iter()
        .flat_map(GeoRecord::network_names)
        .find_map(rules::match_cloud)
        .unwrap_or(CloudProvider::Unknown)
}

/// VPN/proxy likelihood; `Unknown` without a geolocation record.
pub fn assess_vpn_likelihood(geo: Option<&GeoRecord>) -> VpnLikelihood {
    let Some(geo) = geo else {
        return VpnLikelihood::Unknown;
    };
    if geo.is_proxy || geo.is_hosting || geo.network_names().any(rules::matches_datacenter_or_vpn) {
        VpnLikelihood::High
    } else {
        VpnLikelihood::Low
    }
}

/// Honeypot score, verdict and reasons.
pub fn assess_honeypot(inputs: &ScoringInputs<'_>, cloud: CloudProvider) -> HoneypotAssessment {
    let mut score: u8 = 0;
    let mut reasons = Vec::new();

    if cloud.is_identified() {
        score = score.saturating_add(HONEYPOT_CLOUD_POINTS);
        reasons.push(format!("Hosted on cloud provider {cloud}"));
    }
    if let Some(ptr) = inputs.ptr_hostname() {
        if let Some(fragment) = rules::match_generic_ptr(ptr) {
            score = score.saturating_add(HONEYPOT_PTR_POINTS);
            reasons.push(format!("Generic infrastructure PTR hostname ({fragment}): {ptr}"));
        }
    }
    if !inputs.http_reachable {
        score = score.saturating_add(HONEYPOT_UNREACHABLE_POINTS);
        reasons.push("HTTP service unreachable".to_string());
    }
    if !inputs.geo.is_some_and(GeoRecord::has_city) {
        score = score.saturating_add(HONEYPOT_NO_CITY_POINTS);
        reasons.push("No city resolved by geolocation".to_string());
    }

    let score = score.min(HONEYPOT_MAX);
    HoneypotAssessment {
        score,
        verdict: HoneypotVerdict::from_score(score),
        reasons,
    }
}

/// Confidence in the target's network identity, in `[0, 100]`.
pub fn compute_confidence(geo: Option<&GeoRecord>, is_tor_exit: bool, cloud: CloudProvider) -> u8 {
    let mut confidence: i32 = 100;
    if geo.is_some_and(|g| g.is_proxy) {
        confidence -= CONFIDENCE_PROXY_PENALTY;
    }
    if geo.is_some_and(|g| g.is_hosting) {
        confidence -= CONFIDENCE_HOSTING_PENALTY;
    }
    if is_tor_exit {
        confidence -= CONFIDENCE_TOR_PENALTY;
    }
    if cloud.is_identified() {
        confidence -= CONFIDENCE_CLOUD_PENALTY;
    }
    u8::try_from(confidence.clamp(0, 100)).unwrap_or(0)
}

/// Runs every rule over `inputs`.
pub fn score(inputs: &ScoringInputs<'_>) -> RiskAssessment {
    let cloud = classify_cloud(inputs.geo);
    RiskAssessment {
        cloud,
        vpn_likelihood: assess_vpn_likelihood(inputs.geo),
        honeypot: assess_honeypot(inputs, cloud),
        confidence: compute_confidence(inputs.geo, inputs.is_tor_exit, cloud),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn geo(org: Option<&str>, city: Option<&str>) -> GeoRecord {
        GeoRecord {
            provider: "test".to_string(),
            country: Some("United States".to_string()),
            org: org.map(str::to_string),
            city: city.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_eighty_point_honeypot_scenario() {
        let record = GeoRecord {
            isp: Some("Amazon Technologies Inc.".to_string()),
            ..geo(None, None)
        };
        let inputs = ScoringInputs {
            geo: Some(&record),
            reverse_dns: Some("ec2-54-1-2-3.compute-1.amazonaws.com"),
            is_tor_exit: false,
            http_reachable: false,
        };

        let risk = score(&inputs);

        assert_eq!(risk.cloud, CloudProvider::Aws);
        assert_eq!(risk.honeypot.score, 80);
        assert_eq!(risk.honeypot.verdict, HoneypotVerdict::LikelyHoneypot);
        assert_eq!(risk.honeypot.reasons.len(), 4);
    }

    #[test]
    fn test_no_geo_scores() {
        let inputs = ScoringInputs {
            geo: None,
            reverse_dns: None,
            is_tor_exit: false,
            http_reachable: false,
        };
        let risk = score(&inputs);

        assert_eq!(risk.cloud, CloudProvider::Unknown);
        assert_eq!(risk.vpn_likelihood, VpnLikelihood::Unknown);
        assert_eq!(risk.confidence, 100);
        // Unreachable plus no city
        assert_eq!(risk.honeypot.score, 40);
        assert_eq!(risk.honeypot.verdict, HoneypotVerdict::Suspicious);
    }

    #[test]
    fn test_clean_reachable_target() {
        let record = geo(Some("Deutsche Telekom AG"), Some("Berlin"));
        let inputs = ScoringInputs {
            geo: Some(&record),
            reverse_dns: Some("p5b0c1d2e.dip0.t-ipconnect.de"),
            is_tor_exit: false,
            http_reachable: true,
        };
        let risk = score(&inputs);

        assert_eq!(risk.cloud, CloudProvider::Unknown);
        assert_eq!(risk.vpn_likelihood, VpnLikelihood::Low);
        assert_eq!(risk.honeypot.score, 0);
        assert!(risk.honeypot.reasons.is_empty());
        assert_eq!(risk.honeypot.verdict, HoneypotVerdict::LikelyActiveService);
        assert_eq!(risk.confidence, 100);
    }

    #[test]
    fn test_vpn_likelihood_from_flags() {
        let mut record = geo(Some("Residential Broadband"), Some("Lyon"));
        assert_eq!(assess_vpn_likelihood(Some(&record)), VpnLikelihood::Low);
        record.is_proxy = true;
        assert_eq!(assess_vpn_likelihood(Some(&record)), VpnLikelihood::High);
        record.is_proxy = false;
        record.is_hosting = true;
        assert_eq!(assess_vpn_likelihood(Some(&record)), VpnLikelihood::High);
    }

    #[test]
    fn test_vpn_likelihood_from_brand() {
        let record = geo(Some("Contabo GmbH"), Some("Nuremberg"));
        assert_eq!(assess_vpn_likelihood(Some(&record)), VpnLikelihood::High);
        // Not a cloud label though
        assert_eq!(classify_cloud(Some(&record)), CloudProvider::Unknown);
    }

    #[test]
    fn test_cloud_checks_org_before_isp() {
        let record = GeoRecord {
            isp: Some("Google LLC".to_string()),
            ..geo(Some("Hetzner Online GmbH"), None)
        };
        assert_eq!(classify_cloud(Some(&record)), CloudProvider::Hetzner);
    }

    #[test]
    fn test_ptr_falls_back_to_provider_hostname() {
        let record = GeoRecord {
            hostname: Some("static.88-198-1-2.clients.your-server.de".to_string()),
            ..geo(None, Some("Falkenstein"))
        };
        let inputs = ScoringInputs {
            geo: Some(&record),
            reverse_dns: None,
            is_tor_exit: false,
            http_reachable: true,
        };
        let honeypot = assess_honeypot(&inputs, CloudProvider::Unknown);
        assert_eq!(honeypot.score, 20);
        assert!(honeypot.reasons[0].contains("static"));
    }

    #[test]
    fn test_confidence_deductions() {
        let mut record = geo(Some("Amazon.com"), None);
        record.is_proxy = true;
        record.is_hosting = true;
        assert_eq!(compute_confidence(Some(&record), false, CloudProvider::Aws), 45);
        assert_eq!(compute_confidence(Some(&record), true, CloudProvider::Aws), 5);
        assert_eq!(compute_confidence(None, true, CloudProvider::Unknown), 60);
    }

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(HoneypotVerdict::from_score(0), HoneypotVerdict::LikelyActiveService);
        assert_eq!(HoneypotVerdict::from_score(34), HoneypotVerdict::LikelyActiveService);
        assert_eq!(HoneypotVerdict::from_score(35), HoneypotVerdict::Suspicious);
        assert_eq!(HoneypotVerdict::from_score(59), HoneypotVerdict::Suspicious);
        assert_eq!(HoneypotVerdict::from_score(60), HoneypotVerdict::LikelyHoneypot);
        assert_eq!(HoneypotVerdict::from_score(100), HoneypotVerdict::LikelyHoneypot);
    }

    #[test]
    fn test_serialized_labels() {
        assert_eq!(serde_json::to_value(CloudProvider::Aws).unwrap(), "AWS");
        assert_eq!(serde_json::to_value(CloudProvider::DigitalOcean).unwrap(), "DigitalOcean");
        assert_eq!(
            serde_json::to_value(HoneypotVerdict::LikelyActiveService).unwrap(),
            "Likely Active Service"
        );
        for provider in <CloudProvider as strum::IntoEnumIterator>::iter() {
            assert_eq!(serde_json::to_value(provider).unwrap(), provider.as_str());
        }
    }

    /// Builds scoring inputs from the four honeypot condition switches.
    fn conditions(
        cloud: bool,
        ptr: bool,
        unreachable: bool,
        no_city: bool,
    ) -> (GeoRecord, Option<&'static str>, bool) {
        let record = geo(
            Some(if cloud { "Vultr Holdings" } else { "Regional Cable Co" }),
            if no_city { None } else { Some("Paris") },
        );
        let reverse = if ptr {
            Some("host-1.static.example.net")
        } else {
            Some("mail.example.net")
        };
        (record, reverse, !unreachable)
    }

    proptest! {
        #[test]
        fn prop_honeypot_monotonic_and_capped(
            cloud in any::<bool>(),
            ptr in any::<bool>(),
            unreachable in any::<bool>(),
            no_city in any::<bool>(),
            flip in 0usize..4,
        ) {
            let mut flags = [cloud, ptr, unreachable, no_city];
            let (record, reverse, reachable) = conditions(flags[0], flags[1], flags[2], flags[3]);
            let before = score(&ScoringInputs {
                geo: Some(&record),
                reverse_dns: reverse,
                is_tor_exit: false,
                http_reachable: reachable,
            });

            flags[flip] = true;
            let (record, reverse, reachable) = conditions(flags[0], flags[1], flags[2], flags[3]);
            let after = score(&ScoringInputs {
                geo: Some(&record),
                reverse_dns: reverse,
                is_tor_exit: false,
                http_reachable: reachable,
            });

            prop_assert!(after.honeypot.score >= before.honeypot.score);
            prop_assert!(after.honeypot.score <= 80);
            prop_assert_eq!(after.honeypot.reasons.len(), flags.iter().filter(|f| **f).count());
        }

        #[test]
        fn prop_confidence_in_range(
            proxy in any::<bool>(),
            hosting in any::<bool>(),
            tor in any::<bool>(),
            cloud in any::<bool>(),
        ) {
            let mut record = geo(None, None);
            record.is_proxy = proxy;
            record.is_hosting = hosting;
            let label = if cloud { CloudProvider::Aws } else { CloudProvider::Unknown };
            let confidence = compute_confidence(Some(&record), tor, label);
            prop_assert!(confidence <= 100);
            let expected = 100
                - 25 * proxy as i32
                - 20 * hosting as i32
                - 40 * tor as i32
                - 10 * cloud as i32;
            prop_assert_eq!(i32::from(confidence), expected.max(0));
        }
    }
}
