//! # Subsystem Wiring
//!
//! Initialization order:
//!
//! 1. Identity store (sw-01), loaded from the configured document
//! 2. Whitelist gateway (sw-02), sharing the store through `Arc`

use std::sync::Arc;

use sw_01_identity_store::{IdentityStore, JsonFileStorage, PersistenceError};
use sw_02_whitelist_gateway::WhitelistGateway;
use tracing::info;

use super::RuntimeConfig;

/// Container holding the initialized subsystems.
pub struct WhitelistContainer {
    /// Identity store shared with the gateway.
    pub store: Arc<IdentityStore<JsonFileStorage>>,
    /// Admission hook and administrative surface.
    pub gateway: WhitelistGateway<JsonFileStorage>,
    pub config: RuntimeConfig,
}

impl WhitelistContainer {
    /// Load the whitelist and build the gateway.
    ///
    /// # Errors
    ///
    /// Fails if the document exists but cannot be read or parsed, or if an
    /// absent document cannot be created. The caller must not accept
    /// connections in that case.
    pub fn new(config: RuntimeConfig) -> Result<Self, PersistenceError> {
        info!("[sw-01] Initializing Identity Store...");
        let store = Arc::new(IdentityStore::load(JsonFileStorage::new(
            &config.whitelist_path,
        ))?);

        info!("[sw-02] Initializing Whitelist Gateway...");
        let gateway = WhitelistGateway::new(Arc::clone(&store), config.gateway_config());

        Ok(Self {
            store,
            gateway,
            config,
        })
    }
}
