//! Provider adapter seam.

use anyhow::Result;

use super::types::GeoRecord;

/// One geolocation provider: how to ask it about an IP and how to read its answer.
///
/// Adapters hold no client; the chain performs the request so every provider
/// shares the same timeout and error handling.
pub trait GeoProvider: Send + Sync {
    /// Short provider name stored in `GeoRecord::provider`.
    fn name(&self) -> &'static str;

    /// Full request URL for `ip`.
    fn request_url(&self, ip: &str) -> String;

    /// Normalizes a response body.
    ///
    /// # Errors
    ///
    /// Returns an error for undecodable JSON, a provider-declared failure, or
    /// a payload without a country (treated as incomplete).
    fn normalize(&self, body: &str) -> Result<GeoRecord>;
}
