//! target_recon library: single-target reconnaissance and risk scoring
//!
//! This library turns one IP address or hostname into a unified report by
//! querying several independent, unreliable intelligence sources concurrently
//! (DNS, geolocation/ASN providers, the Tor exit list, a TLS handshake and an
//! HTTP probe) and scoring the merged signals: cloud provider, VPN/proxy
//! likelihood, a honeypot assessment and an overall confidence score.
//!
//! # Example
//!
//! ```no_run
//! use target_recon::{Config, ReconEngine};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = ReconEngine::new(Config::default())?;
//! let report = engine.produce_report("example.com").await?;
//! println!(
//!     "{} -> {} (honeypot {}, confidence {})",
//!     report.target, report.resolved_address, report.honeypot.score, report.confidence
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod dns;
pub mod error_handling;
pub mod geo;
pub mod initialization;
pub mod probe;
mod report;
pub mod scoring;
pub mod target;
pub mod tls;
pub mod tor;
mod utils;

// Re-export public API
pub use config::{Config, GeoProviderConfig, GeoProviderKind, LogFormat, LogLevel};
pub use error_handling::{ErrorType, ProcessingStats, ReconError};
pub use report::{ReconEngine, RiskReport, SourceTimings};
pub use target::{Target, TargetKind};
pub use tor::TorRegistry;
