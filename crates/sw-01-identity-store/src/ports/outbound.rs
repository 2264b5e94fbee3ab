//! # Outbound Ports
//!
//! Storage backend the Identity Store persists through.

use crate::domain::{PersistenceError, WhitelistDocument};

/// Whole-document storage backend.
///
/// Implementations must replace the document atomically from the caller's
/// point of view: a reader of the backend sees either the previous document
/// or the new one, never a partial write.
pub trait DocumentStorage: Send + Sync {
    /// Read the document. `Ok(None)` when it does not exist yet.
    fn load(&self) -> Result<Option<WhitelistDocument>, PersistenceError>;

    /// Replace the document (creating any containing directory).
    fn save(&self, document: &WhitelistDocument) -> Result<(), PersistenceError>;

    /// Human-readable location for log lines.
    fn describe(&self) -> String;
}
