//! Report assembly.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use hickory_resolver::TokioAsyncResolver;

use crate::config::Config;
use crate::dns::{
    collect_dns_intel, resolve_target, reverse_dns_lookup, DnsIntel, ResolvedAddress,
};
use crate::error_handling::{ErrorType, InitializationError, ProcessingStats, ReconError};
use crate::geo::GeoChain;
use crate::initialization::{init_client, init_probe_client, init_resolver};
use crate::probe::{probe_target_url, probe_url, HttpProbeResult};
use crate::scoring::{self, ScoringInputs};
use crate::target::Target;
use crate::tls::{inspect_certificate, TlsCertificateInfo};
use crate::tor::TorRegistry;
use crate::utils::{duration_to_ms, timed};

use super::types::{RiskReport, SourceTimings};

/// Produces reports for individual targets.
///
/// Holds the shared HTTP clients, DNS resolver, provider chain and Tor
/// registry. The engine is `Send + Sync`; reports for different targets may be
/// produced concurrently from one instance.
pub struct ReconEngine {
    config: Config,
    client: Arc<reqwest::Client>,
    probe_client: Arc<reqwest::Client>,
    resolver: Arc<TokioAsyncResolver>,
    geo: GeoChain,
    tor: Arc<TorRegistry>,
    stats: Arc<ProcessingStats>,
}

impl ReconEngine {
    /// Builds an engine and its shared resources from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ReconError::Initialization` if an HTTP client or the DNS
    /// resolver cannot be created.
    pub fn new(config: Config) -> Result<Self, ReconError> {
        let client = init_client(&config).map_err(InitializationError::from)?;
        let probe_client = init_probe_client(&config).map_err(InitializationError::from)?;
        let resolver = init_resolver(&config)?;
        let geo = GeoChain::new(&config.geo_providers, (*client).clone(), config.geo_timeout);
        let tor = Arc::new(TorRegistry::new(config.tor_refresh_interval));

        log::debug!("Geolocation chain: {}", geo.provider_names().join(" -> "));

        Ok(Self {
            config,
            client,
            probe_client,
            resolver,
            geo,
            tor,
            stats: Arc::new(ProcessingStats::new()),
        })
    }

    /// Replaces the Tor registry, e.g. to share one across engines.
    pub fn with_tor_registry(mut self, tor: Arc<TorRegistry>) -> Self {
        self.tor = tor;
        self
    }

    /// Degraded-source counters accumulated across reports.
    pub fn stats(&self) -> Arc<ProcessingStats> {
        Arc::clone(&self.stats)
    }

    /// Shared Tor registry.
    pub fn tor_registry(&self) -> Arc<TorRegistry> {
        Arc::clone(&self.tor)
    }

    /// Produces a report for `raw_target`.
    ///
    /// Classification is the only step that can fail. Every other source runs
    /// concurrently under its own timeout and degrades to an absent field.
    ///
    /// # Errors
    ///
    /// Returns `ReconError::EmptyTarget` or `ReconError::MalformedTarget` for
    /// input that is not an IP literal or hostname.
    pub async fn produce_report(&self, raw_target: &str) -> Result<RiskReport, ReconError> {
        let started = Instant::now();
        let target = Target::classify(raw_target)?;
        log::info!("Producing report for {target} ({:?})", target.kind());

        let (resolved, resolve_ms) =
            timed(resolve_target(&target, &self.resolver, self.config.dns_timeout)).await;
        if resolved.degraded {
            self.stats.increment_error(ErrorType::DnsResolutionDegraded);
        }

        let url = probe_target_url(&target.url_host(), self.config.https_port);
        let (
            (dns, dns_ms),
            (reverse_dns, reverse_dns_ms),
            (geo, geo_ms),
            (tor, tor_ms),
            (tls, tls_ms),
            (http_probe, http_ms),
        ) = tokio::join!(
            timed(self.collect_dns(&target)),
            timed(self.lookup_reverse_dns(&resolved)),
            timed(self.geo.lookup(&resolved.address, &self.stats)),
            timed(self.check_tor(&resolved)),
            timed(self.inspect_tls(target.as_str())),
            timed(self.probe_http(&url)),
        );

        let risk = scoring::score(&ScoringInputs {
            geo: geo.as_ref(),
            reverse_dns: reverse_dns.as_deref(),
            is_tor_exit: tor,
            http_reachable: http_probe.reachable,
        });

        let timings = SourceTimings {
            resolve_ms,
            dns_ms: dns.as_ref().map(|_| dns_ms),
            reverse_dns_ms: resolved.ip().map(|_| reverse_dns_ms),
            geo_ms,
            tor_ms,
            tls_ms,
            http_ms,
            total_ms: duration_to_ms(started.elapsed()),
        };

        log::info!(
            "Report for {target}: cloud={}, vpn={:?}, honeypot={} ({}), confidence={}",
            risk.cloud,
            risk.vpn_likelihood,
            risk.honeypot.score,
            risk.honeypot.verdict.as_str(),
            risk.confidence
        );
        self.stats.increment_reports();

        Ok(RiskReport {
            target: target.as_str().to_string(),
            target_kind: target.kind(),
            resolved_address: resolved.address,
            resolution_degraded: resolved.degraded,
            reverse_dns,
            dns,
            geo,
            tor,
            tls,
            http: http_probe.reachable,
            http_probe,
            cloud: risk.cloud,
            vpn_likelihood: risk.vpn_likelihood,
            honeypot: risk.honeypot,
            confidence: risk.confidence,
            timings,
            timestamp: Utc::now(),
        })
    }

    async fn collect_dns(&self, target: &Target) -> Option<DnsIntel> {
        if !target.is_hostname() {
            return None;
        }
        let intel = collect_dns_intel(
            target.as_str(),
            &self.resolver,
            self.config.dns_timeout,
            &self.stats,
        )
        .await;
        Some(intel)
    }

    async fn lookup_reverse_dns(&self, resolved: &ResolvedAddress) -> Option<String> {
        if resolved.ip().is_none() {
            return None;
        }
        let lookup = reverse_dns_lookup(&resolved.address, &self.resolver);
        match tokio::time::timeout(self.config.dns_timeout, lookup).await {
            Ok(Ok(name)) => name,
            Ok(Err(e)) => {
                log::warn!("Reverse DNS lookup for {} failed: {e}", resolved.address);
                self.stats.increment_error(ErrorType::DnsReverseLookupError);
                None
            }
            Err(_) => {
                log::warn!("Reverse DNS lookup for {} timed out", resolved.address);
                self.stats.increment_error(ErrorType::SourceTimeout);
                None
            }
        }
    }

    async fn check_tor(&self, resolved: &ResolvedAddress) -> bool {
        let refresh = self.tor.refresh_if_stale(
            &self.client,
            &self.config.tor_list_url,
            self.config.tor_fetch_timeout,
        );
        if refresh.await.is_err() {
            self.stats.increment_error(ErrorType::TorListRefreshError);
        }
        resolved.ip().is_some() && self.tor.is_member(&resolved.address)
    }

    async fn inspect_tls(&self, host: &str) -> Option<TlsCertificateInfo> {
        let inspection = inspect_certificate(
            host,
            self.config.https_port,
            self.config.tcp_connect_timeout,
            self.config.tls_handshake_timeout,
        );
        // The inner timeouts bound each phase; this bounds the whole branch
        let budget = self.config.tcp_connect_timeout + self.config.tls_handshake_timeout;
        match tokio::time::timeout(budget, inspection).await {
            Ok(Ok(info)) => Some(info),
            Ok(Err(e)) => {
                log::warn!("TLS inspection of {host} failed: {e}");
                self.stats.increment_error(ErrorType::TlsInspectionError);
                None
            }
            Err(_) => {
                log::warn!("TLS inspection of {host} timed out");
                self.stats.increment_error(ErrorType::SourceTimeout);
                None
            }
        }
    }

    async fn probe_http(&self, url: &str) -> HttpProbeResult {
        let result = probe_url(&self.probe_client, url, self.config.http_timeout).await;
        if !result.reachable {
            self.stats.increment_error(ErrorType::HttpProbeError);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_send_sync() {
        assert_send_sync::<ReconEngine>();
    }

    #[tokio::test]
    async fn test_empty_target_is_fatal() {
        let engine = ReconEngine::new(Config::default()).unwrap();
        assert!(matches!(
            engine.produce_report("   ").await,
            Err(ReconError::EmptyTarget)
        ));
        assert_eq!(engine.stats().total_reports(), 0);
    }

    #[tokio::test]
    async fn test_malformed_target_is_fatal() {
        let engine = ReconEngine::new(Config::default()).unwrap();
        assert!(matches!(
            engine.produce_report("https://example.com/path").await,
            Err(ReconError::MalformedTarget(_))
        ));
    }

    #[tokio::test]
    async fn test_with_tor_registry_shares_instance() {
        let registry = Arc::new(TorRegistry::default());
        let engine = ReconEngine::new(Config::default())
            .unwrap()
            .with_tor_registry(Arc::clone(&registry));
        assert!(Arc::ptr_eq(&engine.tor_registry(), &registry));
    }
}
