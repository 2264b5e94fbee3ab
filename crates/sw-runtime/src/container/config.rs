//! # Runtime Configuration
//!
//! Everything the binary needs to start the whitelist.
//!
//! ## Sources (lowest to highest precedence)
//!
//! 1. `RuntimeConfig::default()`
//! 2. Environment (`SW_MISMATCH_MESSAGE`, `SW_NOT_WHITELISTED_MESSAGE`)
//! 3. Command line (`--whitelist`, `--log-level`, which clap also reads from
//!    `SW_WHITELIST_PATH` and `SW_LOG`)

use std::path::PathBuf;
use sw_01_identity_store::JsonFileStorage;
use sw_02_whitelist_gateway::{GatewayConfig, RejectMessages};

/// Overrides the identity-mismatch disconnect text.
pub const ENV_MISMATCH_MESSAGE: &str = "SW_MISMATCH_MESSAGE";

/// Overrides the not-whitelisted disconnect text.
pub const ENV_NOT_WHITELISTED_MESSAGE: &str = "SW_NOT_WHITELISTED_MESSAGE";

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Location of the persisted whitelist document.
    pub whitelist_path: PathBuf,
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Disconnect texts shown to rejected players.
    pub messages: RejectMessages,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            whitelist_path: PathBuf::from(JsonFileStorage::DEFAULT_PATH),
            log_filter: "info".to_string(),
            messages: RejectMessages::default(),
        }
    }
}

impl RuntimeConfig {
    /// Apply message overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply message overrides from `lookup`. Blank values are ignored.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(text) = non_blank(ENV_MISMATCH_MESSAGE) {
            self.messages.identity_mismatch = text;
        }
        if let Some(text) = non_blank(ENV_NOT_WHITELISTED_MESSAGE) {
            self.messages.not_whitelisted = text;
        }
        self
    }

    /// Gateway settings derived from this configuration.
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            messages: self.messages.clone(),
        }
    }
}
