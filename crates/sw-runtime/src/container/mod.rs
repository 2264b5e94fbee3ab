//! # Whitelist Container
//!
//! Owns the single identity store and the gateway built over it.

pub mod config;
pub mod subsystems;

pub use config::RuntimeConfig;
pub use subsystems::WhitelistContainer;
