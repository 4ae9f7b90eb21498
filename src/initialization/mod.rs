//! Application initialization and resource setup.
//!
//! This module provides functions to initialize all shared resources:
//! - HTTP clients (intelligence sources and target probe)
//! - DNS resolver
//! - Logger
//! - rustls crypto provider

mod client;
mod logger;
mod resolver;

use rustls::crypto::{ring::default_provider, CryptoProvider};

// Re-export public API
pub use client::{init_client, init_probe_client};
pub use logger::init_logger_with;
pub use resolver::init_resolver;

/// Initializes the crypto provider for TLS operations.
///
/// Installs the `ring` provider as the process default for `rustls`. The TLS
/// inspector builds its config with an explicit provider, so this only matters
/// for code paths that rely on the process default.
pub fn init_crypto_provider() {
    // Reinstalling the provider is harmless
    let _ = CryptoProvider::install_default(default_provider());
}
