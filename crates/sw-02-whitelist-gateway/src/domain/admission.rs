//! # Admission Decision Tree
//!
//! Pure policy over a store transaction. The caller runs [`evaluate`] inside
//! `IdentityStore::transact`, so the read-check-mutate sequence is atomic
//! with respect to every other admission and administrative command.

use shared_types::{IdentitySlot, PlayerIdentity, PlayerName};
use sw_01_identity_store::StoreTransaction;

/// Branch of the decision tree taken for one `(name, identity)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// Case 1: placeholder bound to `identity`.
    FirstJoin,
    /// Case 2: already bound to `identity`.
    Verified,
    /// Case 3: bound to a different identity.
    IdentityMismatch {
        /// Identity the name is bound to.
        bound: PlayerIdentity,
    },
    /// Case 4a: `identity` known under other names; `name` adopted as well.
    Renamed {
        /// Names that held `identity` before this admission.
        previous_names: Vec<PlayerName>,
    },
    /// Case 4b: nothing known.
    NotWhitelisted,
}

/// Run the decision tree, mutating the transaction for cases 1 and 4a.
pub fn evaluate(
    tx: &mut StoreTransaction<'_>,
    name: &PlayerName,
    identity: &PlayerIdentity,
) -> AdmissionOutcome {
    let current = tx.get(name.as_str()).cloned();

    match current {
        Some(IdentitySlot::Pending) => {
            tx.put(name.clone(), IdentitySlot::Bound(identity.clone()));
            AdmissionOutcome::FirstJoin
        }
        Some(IdentitySlot::Bound(bound)) if bound == *identity => AdmissionOutcome::Verified,
        Some(IdentitySlot::Bound(bound)) => AdmissionOutcome::IdentityMismatch { bound },
        None if tx.contains_identity(identity.as_str()) => {
            let previous_names = tx.names_bound_to(identity.as_str());
            tx.put(name.clone(), IdentitySlot::Bound(identity.clone()));
            AdmissionOutcome::Renamed { previous_names }
        }
        None => AdmissionOutcome::NotWhitelisted,
    }
}
