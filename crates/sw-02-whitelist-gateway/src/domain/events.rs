//! # Whitelist Events
//!
//! Informational events reported through the `WhitelistEventSink` port.

use crate::domain::RejectReason;
use shared_types::{IdentitySlot, PlayerIdentity, PlayerName};

/// Something noteworthy happened to the whitelist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistEvent {
    /// First join of a pending name: its identity is now known.
    IdentityBound {
        name: PlayerName,
        identity: PlayerIdentity,
    },
    /// A known identity joined under a new name; both names now hold it.
    AliasAdopted {
        name: PlayerName,
        identity: PlayerIdentity,
        previous_names: Vec<PlayerName>,
    },
    /// A session was refused.
    AdmissionRejected {
        name: String,
        identity: String,
        reason: RejectReason,
    },
    /// An administrator added a placeholder.
    PlayerAdded { name: PlayerName },
    /// An administrator removed a name.
    PlayerRemoved {
        name: PlayerName,
        previous: IdentitySlot,
    },
    /// Memory was updated but the document could not be written.
    FlushFailed {
        operation: &'static str,
        error: String,
    },
}
