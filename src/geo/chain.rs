//! Ordered provider fallback chain.

use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::GeoProviderConfig;
use crate::error_handling::{ErrorType, ProcessingStats};

use super::adapters::build_provider;
use super::provider::GeoProvider;
use super::types::GeoRecord;

/// Queries providers in configured order until one returns a usable record.
///
/// The first normalized record wins; later providers are never consulted and
/// results are never merged.
pub struct GeoChain {
    providers: Vec<Box<dyn GeoProvider>>,
    client: reqwest::Client,
    timeout: Duration,
}

impl GeoChain {
    /// Builds the chain from provider configs, sharing `client` across adapters.
    pub fn new(configs: &[GeoProviderConfig], client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            providers: configs.iter().map(build_provider).collect(),
            client,
            timeout,
        }
    }

    /// Provider names in query order.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    async fn fetch(&self, provider: &dyn GeoProvider, address: &str) -> Result<GeoRecord> {
        let url = provider.request_url(address);
        log::debug!("Querying {} for {address}", provider.name());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", provider.name()))?
            .error_for_status()
            .with_context(|| format!("{} returned an error status", provider.name()))?;
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response body", provider.name()))?;

        provider.normalize(&body)
    }

    /// Looks up `address`, returning `None` when every provider fails.
    pub async fn lookup(&self, address: &str, stats: &ProcessingStats) -> Option<GeoRecord> {
        for provider in &self.providers {
            match tokio::time::timeout(self.timeout, self.fetch(provider.as_ref(), address)).await {
                Ok(Ok(record)) => {
                    log::debug!("Geolocation for {address} from {}", provider.name());
                    return Some(record);
                }
                Ok(Err(e)) => {
                    log::warn!("{} failed for {address}: {e:#}", provider.name());
                    stats.increment_error(ErrorType::GeoProviderError);
                }
                Err(_) => {
                    log::warn!(
                        "{} timed out after {:?} for {address}",
                        provider.name(),
                        self.timeout
                    );
                    stats.increment_error(ErrorType::SourceTimeout);
                }
            }
        }

        log::warn!("All geolocation providers failed for {address}");
        stats.increment_error(ErrorType::GeoChainExhausted);
        None
    }
}
