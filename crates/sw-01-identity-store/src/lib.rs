//! # SW-01 Identity Store
//!
//! Authoritative name → identity mapping of the whitelist, mirrored to a
//! single persisted document.
//!
//! **Subsystem ID:** 01  
//! **Architecture:** Hexagonal (Domain + Ports/Adapters)
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Point-in-time consistency | A name maps to exactly one slot; readers never see partial updates |
//! | 2 | Write-then-acknowledge | After a mutation returns, the document holds the full mapping (or the flush failure is reported) |
//! | 3 | Unique bound identity | At most one name should hold a given identity; aliases are reported, never auto-resolved |
//!
//! ## Persistence Policy
//!
//! Mutations commit to memory first, then flush the whole mapping. A failed
//! flush is reported through [`FlushStatus::Failed`] and is NOT rolled back:
//! memory stays authoritative for the life of the process.
//!
//! ## Crate Structure
//!
//! - `domain/` - `IdentityTable` (mapping + reverse index), `WhitelistDocument`, errors
//! - `ports/` - `IdentityStoreApi` (inbound), `DocumentStorage` (outbound)
//! - `adapters/` - JSON file storage, in-memory storage
//! - `service.rs` - `IdentityStore`, transactions and flushing
//!
//! ## Usage
//!
//! ```ignore
//! use sw_01_identity_store::{IdentityStore, JsonFileStorage};
//!
//! let store = IdentityStore::load(JsonFileStorage::new("mods/swhitelist/whitelist.json"))?;
//! store.put(PlayerName::new("alice")?, IdentitySlot::Pending)?;
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::storage::{InMemoryStorage, JsonFileStorage};
pub use domain::{IdentityTable, PersistenceError, WhitelistDocument};
pub use ports::inbound::IdentityStoreApi;
pub use ports::outbound::DocumentStorage;
pub use service::{Commit, FlushStatus, IdentityStore, StoreTransaction};
