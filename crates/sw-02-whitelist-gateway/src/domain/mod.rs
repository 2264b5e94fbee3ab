//! # Domain Module
//!
//! Core types and the admission decision tree.

pub mod admission;
pub mod config;
pub mod decision;
pub mod errors;
pub mod events;

pub use admission::{evaluate, AdmissionOutcome};
pub use config::{GatewayConfig, RejectMessages};
pub use decision::{AdmissionDecision, AdmitPath, RejectReason, Rejection};
pub use errors::AdminError;
pub use events::WhitelistEvent;
