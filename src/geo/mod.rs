//! Geolocation and ASN lookup through an ordered provider chain.
//!
//! Each provider is an adapter behind the [`GeoProvider`] trait that knows its
//! request URL and response schema. [`GeoChain`] tries them in order and keeps
//! the first well-formed result.

mod adapters;
mod chain;
mod provider;
mod types;

pub use adapters::{build_provider, IpApiProvider, IpinfoProvider, IpwhoProvider};
pub use chain::GeoChain;
pub use provider::GeoProvider;
pub use types::GeoRecord;
