//! # Inbound Ports
//!
//! What the connection layer and the administrative command surface call.

use crate::domain::{AdminError, AdmissionDecision};
use sw_01_identity_store::WhitelistDocument;

/// Admission hook - called once per inbound session, before setup completes.
pub trait AdmissionApi: Send + Sync {
    /// Decide whether `(name, identity)` may join, updating the store when
    /// the decision tree binds a new identity or name.
    fn admit(&self, name: &str, identity: &str) -> AdmissionDecision;
}

/// Administrative operations - called after the host's capability check.
pub trait WhitelistAdminApi: Send + Sync {
    /// Pre-authorize `name` with a pending identity.
    fn add_player(&self, name: &str) -> Result<(), AdminError>;

    /// Remove `name`. Other names sharing its identity are untouched.
    fn remove_player(&self, name: &str) -> Result<(), AdminError>;

    /// Current entries, for operator inspection.
    fn list_players(&self) -> WhitelistDocument;
}
