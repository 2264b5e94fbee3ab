//! # SW-02 Whitelist Gateway
//!
//! Behavioral layer over the identity store: the admission policy run for
//! every inbound session, and the administrative add/remove operations.
//!
//! **Subsystem ID:** 02  
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Admission Decision Tree
//!
//! Evaluated in order, atomically against the store:
//!
//! | Case | Store state for `name` | Outcome | Mutation |
//! |------|------------------------|---------|----------|
//! | 1 | pending placeholder | Admit (first join) | bind `identity` |
//! | 2 | bound to `identity` | Admit (verified) | none |
//! | 3 | bound to another identity | Reject (identity mismatch) | none |
//! | 4a | absent, `identity` bound elsewhere | Admit (renamed) | bind `name` too, old name kept |
//! | 4b | absent, `identity` unknown | Reject (not whitelisted) | none |
//!
//! ## Failure Policy
//!
//! A failed flush is logged and reported as a `FlushFailed` event. It never
//! changes the decision returned to the connection layer or the reply given
//! to an administrator.
//!
//! ## Crate Structure
//!
//! - `domain/` - decision types, the decision tree, events, errors, config
//! - `ports/` - `AdmissionApi`, `WhitelistAdminApi` (inbound), `WhitelistEventSink` (outbound)
//! - `adapters/` - event sinks, `swhitelist` command syntax
//! - `service.rs` - `WhitelistGateway`

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::command::{AdminCommand, CommandParseError, CommandReply};
pub use adapters::events::{RecordingEventSink, TracingEventSink};
pub use domain::{
    AdminError, AdmissionDecision, AdmissionOutcome, AdmitPath, GatewayConfig, RejectMessages,
    RejectReason, Rejection, WhitelistEvent,
};
pub use ports::inbound::{AdmissionApi, WhitelistAdminApi};
pub use ports::outbound::WhitelistEventSink;
pub use service::WhitelistGateway;
