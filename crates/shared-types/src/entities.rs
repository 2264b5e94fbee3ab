//! # Core Domain Entities
//!
//! - `PlayerName`: case-sensitive, non-empty whitelist key.
//! - `PlayerIdentity`: opaque, non-empty, stable identity token (usually a
//!   hyphenated UUID).
//! - `IdentitySlot`: what a name maps to, either a bound identity or the
//!   pending placeholder written by an administrator.

use crate::errors::NameError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

// =============================================================================
// PLAYER NAME
// =============================================================================

/// Human-readable whitelist key. Case-sensitive, never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Validate and wrap a name.
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NameError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PlayerName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl Borrow<str> for PlayerName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// PLAYER IDENTITY
// =============================================================================

/// Stable identity token of a principal, independent of its display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerIdentity(String);

impl PlayerIdentity {
    /// Validate and wrap an identity token.
    pub fn new(identity: impl Into<String>) -> Result<Self, NameError> {
        let identity = identity.into();
        if identity.is_empty() {
            return Err(NameError::EmptyIdentity);
        }
        Ok(Self(identity))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canonical hyphenated lowercase rendering, the form session layers report.
impl From<Uuid> for PlayerIdentity {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }
}

impl TryFrom<String> for PlayerIdentity {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for PlayerIdentity {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlayerIdentity> for String {
    fn from(identity: PlayerIdentity) -> Self {
        identity.0
    }
}

impl Borrow<str> for PlayerIdentity {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PlayerIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// IDENTITY SLOT
// =============================================================================

/// The value a whitelisted name maps to.
///
/// Persisted as a plain string: `""` for `Pending`, the token otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IdentitySlot {
    /// Pre-authorized by an administrator, identity not yet observed.
    #[default]
    Pending,
    /// Identity adopted on first join (or via a rename).
    Bound(PlayerIdentity),
}

impl IdentitySlot {
    /// Map a persisted value back to a slot (`""` is the placeholder).
    pub fn from_document_value(value: impl Into<String>) -> Self {
        match PlayerIdentity::new(value) {
            Ok(identity) => Self::Bound(identity),
            Err(_) => Self::Pending,
        }
    }

    /// Persisted representation.
    pub fn as_document_value(&self) -> &str {
        match self {
            Self::Pending => "",
            Self::Bound(identity) => identity.as_str(),
        }
    }

    pub fn identity(&self) -> Option<&PlayerIdentity> {
        match self {
            Self::Pending => None,
            Self::Bound(identity) => Some(identity),
        }
    }

    /// True when the slot is bound to exactly `identity`.
    pub fn is_bound_to(&self, identity: &str) -> bool {
        self.identity().is_some_and(|bound| bound.as_str() == identity)
    }
}

impl From<PlayerIdentity> for IdentitySlot {
    fn from(identity: PlayerIdentity) -> Self {
        Self::Bound(identity)
    }
}

impl From<String> for IdentitySlot {
    fn from(value: String) -> Self {
        Self::from_document_value(value)
    }
}

impl From<IdentitySlot> for String {
    fn from(slot: IdentitySlot) -> Self {
        match slot {
            IdentitySlot::Pending => String::new(),
            IdentitySlot::Bound(identity) => identity.into(),
        }
    }
}

impl fmt::Display for IdentitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("<pending>"),
            Self::Bound(identity) => identity.fmt(f),
        }
    }
}
