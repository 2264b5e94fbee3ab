//! # Whitelist Runtime Library
//!
//! Exposes the runtime modules for testing. The entry point is the
//! `swhitelist` binary in `main.rs`.
//!
//! - `container/` - configuration and subsystem wiring
//! - `console` - operator line commands

pub mod console;
pub mod container;

pub use container::{RuntimeConfig, WhitelistContainer};
