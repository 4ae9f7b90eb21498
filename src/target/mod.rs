//! Target classification.
//!
//! Decides whether raw input names an IP literal or a hostname. Pure: no I/O,
//! and the only failure mode is input that is neither.

use std::fmt;
use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::MAX_HOSTNAME_LENGTH;
use crate::error_handling::ReconError;

/// Lower-case hostname: dot-separated labels of 1-63 chars, no leading or
/// trailing hyphen. Underscores are tolerated (`_dmarc`, SRV-style names).
static HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9_]([a-z0-9_-]{0,61}[a-z0-9_])?(\.[a-z0-9_]([a-z0-9_-]{0,61}[a-z0-9_])?)*$")
        .unwrap_or_else(|e| panic!("hostname pattern is a valid regex: {e}"))
});

/// Kind of target supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// Numeric IPv4 or IPv6 address
    IpLiteral,
    /// DNS name
    Hostname,
}

/// A classified, normalized target. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    value: String,
    kind: TargetKind,
    ip: Option<IpAddr>,
}

impl Target {
    /// Classifies raw input.
    ///
    /// Surrounding whitespace is ignored. IPv6 literals may be wrapped in
    /// brackets. Hostnames are lower-cased and lose a trailing root dot.
    ///
    /// # Errors
    ///
    /// - `ReconError::EmptyTarget` for empty or whitespace-only input
    /// - `ReconError::MalformedTarget` for anything that is neither an IP
    ///   literal nor a hostname (URLs, paths, embedded spaces, ...)
    pub fn classify(raw: &str) -> Result<Self, ReconError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ReconError::EmptyTarget);
        }

        let unbracketed = trimmed
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .unwrap_or(trimmed);
        if let Ok(ip) = unbracketed.parse::<IpAddr>() {
            return Ok(Target {
                value: ip.to_string(),
                kind: TargetKind::IpLiteral,
                ip: Some(ip),
            });
        }

        let host = trimmed.strip_suffix('.').unwrap_or(trimmed).to_ascii_lowercase();
        if host.len() > MAX_HOSTNAME_LENGTH || !HOSTNAME_RE.is_match(&host) {
            return Err(ReconError::MalformedTarget(trimmed.to_string()));
        }

        Ok(Target {
            value: host,
            kind: TargetKind::Hostname,
            ip: None,
        })
    }

    /// Normalized target string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Classification result.
    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Parsed address for IP literals.
    pub fn ip(&self) -> Option<IpAddr> {
        self.ip
    }

    /// True for hostname targets.
    pub fn is_hostname(&self) -> bool {
        self.kind == TargetKind::Hostname
    }

    /// Host component for URLs (`[..]` around IPv6 literals).
    pub fn url_host(&self) -> String {
        match self.ip {
            Some(IpAddr::V6(v6)) => format!("[{v6}]"),
            _ => self.value.clone(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
