//! # Shared Types Crate
//!
//! Value types shared by every whitelist crate.
//!
//! ## Design Principles
//!
//! - **Validated at the edge**: a `PlayerName` or `PlayerIdentity` can only be
//!   built from a non-empty string, so the store never sees an empty key.
//! - **Typed placeholder**: the "identity not yet known" state is
//!   `IdentitySlot::Pending`, never an empty string. The empty string only
//!   exists in the persisted document.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
