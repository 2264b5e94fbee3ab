//! # Whitelist Runtime
//!
//! Entry point for the `swhitelist` binary.
//!
//! ## Startup Sequence
//!
//! 1. Parse command line (and its environment fallbacks)
//! 2. Initialize logging
//! 3. Load the whitelist (fatal on error)
//! 4. Serve console lines from stdin until EOF or Ctrl+C

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sw_01_identity_store::{IdentityStoreApi, JsonFileStorage};
use sw_runtime::console;
use sw_runtime::{RuntimeConfig, WhitelistContainer};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// swhitelist: identity-bound player whitelist
#[derive(Parser, Debug)]
#[command(name = "swhitelist")]
#[command(about = "Name to identity whitelist with an operator console")]
struct Args {
    /// Path of the whitelist document
    #[arg(long, env = "SW_WHITELIST_PATH", default_value = JsonFileStorage::DEFAULT_PATH)]
    whitelist: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "SW_LOG", default_value = "info")]
    log_level: String,
}

impl Args {
    fn into_config(self) -> RuntimeConfig {
        RuntimeConfig {
            whitelist_path: self.whitelist,
            log_filter: self.log_level,
            ..RuntimeConfig::default()
        }
        .with_env_overrides()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Args::parse().into_config();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let path = config.whitelist_path.clone();
    let container = WhitelistContainer::new(config)
        .with_context(|| format!("Failed to load whitelist from {}", path.display()))?;

    info!("===========================================");
    info!("  swhitelist v{}", env!("CARGO_PKG_VERSION"));
    info!("  Whitelist: {}", path.display());
    info!("  Entries:   {}", container.store.len());
    info!("===========================================");
    info!("Console ready. Type `help` for commands, Ctrl+C to stop.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read console input")? else {
                    info!("Console input closed");
                    break;
                };
                if let Some(reply) = console::handle_line(&container.gateway, &line) {
                    println!("{reply}");
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl+C")?;
                info!("Shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}
