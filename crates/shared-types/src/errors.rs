//! # Error Types
//!
//! Validation errors for the shared value types.

use thiserror::Error;

/// A name or identity failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Player names must be non-empty.
    #[error("player name must not be empty")]
    EmptyName,

    /// Identities must be non-empty (use `IdentitySlot::Pending` instead).
    #[error("player identity must not be empty")]
    EmptyIdentity,
}
