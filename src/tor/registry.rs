//! Shared, lazily refreshed set of Tor exit addresses.

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};

use crate::config::TOR_REFRESH_INTERVAL;

use super::clock::{Clock, SystemClock};

/// Parses the bulk exit list: one address per line, `#` comments and blank lines skipped.
pub fn parse_exit_list(body: &str) -> HashSet<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Downloads the exit list from `url` within `timeout`.
///
/// # Errors
///
/// Returns an error on network failure, timeout, or a non-2xx status.
pub async fn fetch_exit_list(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<String> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .with_context(|| format!("Failed to fetch Tor exit list from {url}"))?
        .error_for_status()
        .context("Tor exit list endpoint returned an error status")?;
    response
        .text()
        .await
        .context("Failed to read Tor exit list body")
}

#[derive(Default)]
struct RegistryState {
    exits: Arc<HashSet<String>>,
    last_refreshed: Option<SystemTime>,
}

/// Tor exit-node registry shared across reports.
///
/// The set is replaced wholesale on refresh, never patched. A refresh is only
/// attempted once `refresh_interval` has elapsed since the last success (or
/// when none has happened yet). The network fetch runs outside the lock, so
/// concurrent stale callers may each fetch; the last replace wins.
pub struct TorRegistry {
    state: RwLock<RegistryState>,
    clock: Arc<dyn Clock>,
    refresh_interval: Duration,
}

impl TorRegistry {
    /// Creates an empty registry with the system clock.
    pub fn new(refresh_interval: Duration) -> Self {
        Self::with_clock(refresh_interval, Arc::new(SystemClock))
    }

    /// Creates an empty registry with an explicit time source.
    pub fn with_clock(refresh_interval: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            clock,
            refresh_interval,
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, RegistryState> {
        self.state.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, RegistryState> {
        self.state.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// True when the set has never been loaded or has aged past the interval.
    pub fn is_stale(&self) -> bool {
        match self.read_state().last_refreshed {
            None => true,
            Some(at) => self
                .clock
                .now()
                .duration_since(at)
                .is_ok_and(|age| age >= self.refresh_interval),
        }
    }

    /// Time of the last successful refresh.
    pub fn last_refreshed(&self) -> Option<SystemTime> {
        self.read_state().last_refreshed
    }

    /// Number of known exit addresses.
    pub fn len(&self) -> usize {
        self.read_state().exits.len()
    }

    /// True when no exit addresses are loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exact-match membership test.
    pub fn is_member(&self, ip: &str) -> bool {
        self.read_state().exits.contains(ip)
    }

    /// Atomically replaces the set and stamps the refresh time.
    pub fn replace(&self, exits: HashSet<String>) {
        let now = self.clock.now();
        let mut state = self.write_state();
        state.exits = Arc::new(exits);
        state.last_refreshed = Some(now);
    }

    /// Refreshes through `fetch` when stale.
    ///
    /// Returns `Ok(true)` after a successful replace, `Ok(false)` when the set
    /// was still fresh. On error the set and timestamp are left untouched.
    pub async fn refresh_if_stale_with<F, Fut>(&self, fetch: F) -> Result<bool>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        if !self.is_stale() {
            return Ok(false);
        }

        let body = match fetch().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!(
                    "Tor exit list refresh failed, keeping {} cached entries: {e:#}",
                    self.len()
                );
                return Err(e);
            }
        };

        let exits = parse_exit_list(&body);
        log::info!("Loaded {} Tor exit addresses", exits.len());
        self.replace(exits);
        Ok(true)
    }

    /// Refreshes from the bulk exit list at `url` when stale.
    pub async fn refresh_if_stale(
        &self,
        client: &reqwest::Client,
        url: &str,
        timeout: Duration,
    ) -> Result<bool> {
        self.refresh_if_stale_with(|| fetch_exit_list(client, url, timeout))
            .await
    }
}

impl Default for TorRegistry {
    fn default() -> Self {
        Self::new(TOR_REFRESH_INTERVAL)
    }
}
