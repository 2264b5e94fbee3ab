//! # Identity Store Service
//!
//! Owns the in-memory table and its storage backend.
//!
//! ## Locking
//!
//! One `parking_lot::RwLock` guards the table:
//!
//! - lookups take a shared read guard;
//! - a transaction takes the write guard for its read-check-mutate closure,
//!   then downgrades to an upgradable guard to serialize and flush.
//!
//! Upgradable guards exclude writers and each other but not readers, so the
//! whole mutate+persist sequence of one transaction completes before the
//! next transaction starts, while lookups are only blocked during the
//! in-memory mutation.

use crate::domain::{IdentityTable, PersistenceError, WhitelistDocument};
use crate::ports::inbound::IdentityStoreApi;
use crate::ports::outbound::DocumentStorage;
use parking_lot::{RwLock, RwLockWriteGuard};
use shared_types::{IdentitySlot, PlayerName};
use tracing::{debug, info, warn};


// =============================================================================
// COMMIT RESULT
// =============================================================================

/// What happened to the persisted document after a transaction.
#[derive(Debug)]
pub enum FlushStatus {
    /// Nothing was mutated, nothing was written.
    Unchanged,
    /// The full mapping was written.
    Persisted,
    /// Memory was mutated but the write failed. Memory is NOT rolled back.
    Failed(PersistenceError),
}

impl FlushStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, FlushStatus::Failed(_))
    }
}

/// Outcome of a transaction plus the state of its flush.
#[derive(Debug)]
#[must_use = "a failed flush should be reported"]
pub struct Commit<R> {
    /// Value returned by the transaction closure.
    pub outcome: R,
    /// Flush result.
    pub flush: FlushStatus,
}

impl<R> Commit<R> {
    /// Collapse to `Result`, discarding the outcome on flush failure.
    pub fn into_result(self) -> Result<R, PersistenceError> {
        match self.flush {
            FlushStatus::Failed(e) => Err(e),
            FlushStatus::Unchanged | FlushStatus::Persisted => Ok(self.outcome),
        }
    }
}

// =============================================================================
// TRANSACTION
// =============================================================================

/// Exclusive view of the table inside [`IdentityStore::transact`].
pub struct StoreTransaction<'a> {
    table: &'a mut IdentityTable,
    dirty: bool,
}

impl StoreTransaction<'_> {
    pub fn get(&self, name: &str) -> Option<&IdentitySlot> {
        self.table.get(name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.table.contains_name(name)
    }

    pub fn contains_identity(&self, identity: &str) -> bool {
        self.table.contains_identity(identity)
    }

    pub fn names_bound_to(&self, identity: &str) -> Vec<PlayerName> {
        self.table.names_bound_to(identity)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Insert or overwrite. Marks the transaction for flushing.
    pub fn put(&mut self, name: PlayerName, slot: IdentitySlot) -> Option<IdentitySlot> {
        self.dirty = true;
        self.table.insert(name, slot)
    }

    /// Remove if present. Marks the transaction for flushing only on a hit.
    pub fn remove(&mut self, name: &str) -> Option<IdentitySlot> {
        let previous = self.table.remove(name);
        if previous.is_some() {
            self.dirty = true;
        }
        previous
    }
}

// =============================================================================
// IDENTITY STORE
// =============================================================================

/// The whitelist mapping and its persisted mirror.
pub struct IdentityStore<S: DocumentStorage> {
    table: RwLock<IdentityTable>,
    storage: S,
}

impl<S: DocumentStorage> IdentityStore<S> {
    /// Load the persisted document, or create an empty one if absent.
    ///
    /// # Errors
    ///
    /// Any `PersistenceError` here is fatal: admission must not run against
    /// an unknown whitelist.
    pub fn load(storage: S) -> Result<Self, PersistenceError> {
        let table = match storage.load()? {
            Some(document) => {
                let table = IdentityTable::from_document(&document)?;
                info!(
                    "[sw-01] Loaded {} whitelist entries from {}",
                    table.len(),
                    storage.describe()
                );
                for (identity, count) in table.aliased_identities() {
                    warn!(
                        identity = %identity,
                        names = count,
                        "[sw-01] Identity is bound under several names"
                    );
                }
                table
            }
            None => {
                let table = IdentityTable::new();
                storage.save(&table.to_document())?;
                info!(
                    "[sw-01] No whitelist at {}, created an empty one",
                    storage.describe()
                );
                table
            }
        };

        Ok(Self {
            table: RwLock::new(table),
            storage,
        })
    }

    /// Run `f` as one serialized read-check-mutate unit and flush once if it
    /// changed anything.
    pub fn transact<R, F>(&self, f: F) -> Commit<R>
    where
        F: FnOnce(&mut StoreTransaction<'_>) -> R,
    {
        let mut guard = self.table.write();
        let (outcome, dirty) = {
            let mut tx = StoreTransaction {
                table: &mut *guard,
                dirty: false,
            };
            let outcome = f(&mut tx);
            (outcome, tx.dirty)
        };

        if !dirty {
            return Commit {
                outcome,
                flush: FlushStatus::Unchanged,
            };
        }

        // Readers may proceed; other transactions wait until the flush ends.
        let guard = RwLockWriteGuard::downgrade_to_upgradable(guard);
        let document = guard.to_document();
        let flush = match self.storage.save(&document) {
            Ok(()) => {
                debug!("[sw-01] Flushed {} entries", document.len());
                FlushStatus::Persisted
            }
            Err(e) => FlushStatus::Failed(e),
        };
        drop(guard);

        Commit { outcome, flush }
    }

    /// Storage backend (tests reach through this to inspect it).
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Identities currently bound under more than one name.
    pub fn aliased_identities(&self) -> Vec<(shared_types::PlayerIdentity, usize)> {
        self.table.read().aliased_identities()
    }

    pub fn names_bound_to(&self, identity: &str) -> Vec<PlayerName> {
        self.table.read().names_bound_to(identity)
    }
}

impl<S: DocumentStorage> IdentityStoreApi for IdentityStore<S> {
    fn get(&self, name: &str) -> Option<IdentitySlot> {
        self.table.read().get(name).cloned()
    }

    fn contains_identity(&self, identity: &str) -> bool {
        self.table.read().contains_identity(identity)
    }

    fn put(&self, name: PlayerName, slot: IdentitySlot) -> Result<(), PersistenceError> {
        self.transact(|tx| {
            tx.put(name, slot);
        })
        .into_result()
    }

    fn remove(&self, name: &str) -> Result<bool, PersistenceError> {
        self.transact(|tx| tx.remove(name).is_some()).into_result()
    }

    fn snapshot(&self) -> WhitelistDocument {
        self.table.read().to_document()
    }

    fn len(&self) -> usize {
        self.table.read().len()
    }
}
