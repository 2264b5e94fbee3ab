//! # Inbound Ports
//!
//! API trait defining what the Identity Store offers its callers.
//!
//! Compound read-check-mutate sequences go through
//! [`IdentityStore::transact`](crate::IdentityStore::transact), which is
//! generic and therefore lives on the concrete type.

use crate::domain::{PersistenceError, WhitelistDocument};
use shared_types::{IdentitySlot, PlayerName};

/// Identity Store API - inbound port.
pub trait IdentityStoreApi: Send + Sync {
    /// Point lookup, no side effects.
    fn get(&self, name: &str) -> Option<IdentitySlot>;

    /// Is `identity` bound under any name?
    fn contains_identity(&self, identity: &str) -> bool;

    /// Insert or overwrite, then persist the whole mapping.
    ///
    /// On `Err` the in-memory change has still been applied.
    fn put(&self, name: PlayerName, slot: IdentitySlot) -> Result<(), PersistenceError>;

    /// Delete if present, then persist. Returns whether the name existed.
    ///
    /// On `Err` the in-memory removal has still been applied.
    fn remove(&self, name: &str) -> Result<bool, PersistenceError>;

    /// Point-in-time copy of the full mapping.
    fn snapshot(&self) -> WhitelistDocument;

    /// Number of whitelisted names.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
