//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `target_recon` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the report as JSON
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use target_recon::config::Cli;
use target_recon::initialization::{init_crypto_provider, init_logger_with};
use target_recon::{Config, ReconEngine};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try the current directory first, then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = Config::from(&cli);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    // Initialize crypto provider for TLS operations
    init_crypto_provider();

    let engine = match ReconEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("target_recon error: {e}");
            process::exit(1);
        }
    };

    match engine.produce_report(&cli.target).await {
        Ok(report) => {
            let json = if cli.compact {
                serde_json::to_string(&report)
            } else {
                serde_json::to_string_pretty(&report)
            }
            .context("Failed to serialize report")?;
            println!("{json}");
            engine.stats().log_summary();
            Ok(())
        }
        Err(e) => {
            eprintln!("target_recon error: {e}");
            process::exit(1);
        }
    }
}
