//! # Identity Table
//!
//! In-memory mapping of player name → identity slot, plus a reverse index
//! counting how many names each bound identity is held by. The index keeps
//! `contains_identity` O(1) and makes aliased identities cheap to report.

use crate::domain::{PersistenceError, WhitelistDocument};
use shared_types::{IdentitySlot, PlayerIdentity, PlayerName};
use std::collections::{BTreeMap, HashMap};

/// Name-keyed whitelist with a bound-identity reverse index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityTable {
    entries: BTreeMap<PlayerName, IdentitySlot>,
    /// Bound identity -> number of names holding it. Never holds a zero count.
    bindings: HashMap<PlayerIdentity, usize>,
}

impl IdentityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parsed document, refusing keys that are not valid names.
    pub fn from_document(document: &WhitelistDocument) -> Result<Self, PersistenceError> {
        let mut table = Self::new();
        for (name, identity) in document.entries() {
            let name = PlayerName::new(name).map_err(|reason| PersistenceError::InvalidEntry {
                name: name.to_string(),
                reason,
            })?;
            table.insert(name, IdentitySlot::from_document_value(identity));
        }
        Ok(table)
    }

    pub fn to_document(&self) -> WhitelistDocument {
        self.entries
            .iter()
            .map(|(name, slot)| (name.as_str(), slot.as_document_value()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&IdentitySlot> {
        self.entries.get(name)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Is `identity` bound under any name?
    pub fn contains_identity(&self, identity: &str) -> bool {
        self.bindings.contains_key(identity)
    }

    /// Insert or overwrite, returning the previous slot.
    pub fn insert(&mut self, name: PlayerName, slot: IdentitySlot) -> Option<IdentitySlot> {
        if let Some(identity) = slot.identity() {
            *self.bindings.entry(identity.clone()).or_insert(0) += 1;
        }
        let previous = self.entries.insert(name, slot);
        if let Some(identity) = previous.as_ref().and_then(IdentitySlot::identity) {
            self.unbind(identity);
        }
        previous
    }

    pub fn remove(&mut self, name: &str) -> Option<IdentitySlot> {
        let previous = self.entries.remove(name);
        if let Some(identity) = previous.as_ref().and_then(IdentitySlot::identity) {
            self.unbind(identity);
        }
        previous
    }

    /// Every name currently bound to `identity`, in name order.
    pub fn names_bound_to(&self, identity: &str) -> Vec<PlayerName> {
        if !self.contains_identity(identity) {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|(_, slot)| slot.is_bound_to(identity))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Identities held by more than one name, with their name counts.
    pub fn aliased_identities(&self) -> Vec<(PlayerIdentity, usize)> {
        let mut aliased: Vec<_> = self
            .bindings
            .iter()
            .filter(|(_, count)| **count > 1)
            .map(|(identity, count)| (identity.clone(), *count))
            .collect();
        aliased.sort();
        aliased
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerName, &IdentitySlot)> {
        self.entries.iter()
    }

    fn unbind(&mut self, identity: &PlayerIdentity) {
        if let Some(count) = self.bindings.get_mut(identity.as_str()) {
            *count -= 1;
            if *count == 0 {
                self.bindings.remove(identity.as_str());
            }
        }
    }
}
