//! # Adapters Module
//!
//! - `command`: `swhitelist` / `sw` administrative command syntax
//! - `events`: `WhitelistEventSink` implementations

pub mod command;
pub mod events;
