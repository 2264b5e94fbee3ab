//! # Domain Errors
//!
//! Recoverable failures of the administrative operations. Persistence
//! failures are not here: they are logged, never returned to the caller.

use shared_types::{NameError, PlayerName};
use thiserror::Error;

/// Administrative operation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    /// `add` on a name that is already present (bound or pending).
    #[error("player {0} is already whitelisted")]
    AlreadyWhitelisted(PlayerName),

    /// `remove` on a name that is not present.
    #[error("player {0} is not whitelisted")]
    NotWhitelisted(PlayerName),

    /// The supplied name is not a valid player name.
    #[error("invalid player name: {0}")]
    InvalidName(#[from] NameError),
}
