//! # Domain Errors
//!
//! Error types for the Identity Store subsystem.
//!
//! Every variant is a persistence failure. At startup any of them is fatal;
//! during a mutation they are reported but never undo the in-memory change.

use shared_types::NameError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read, validate or write the persisted whitelist document.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The document exists but could not be read.
    #[error("failed to read whitelist document {}: {source}", .path.display())]
    Read {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The document is not a flat JSON object of string values.
    #[error("whitelist document {} is malformed: {message}", .path.display())]
    Corrupt {
        /// Document path.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The document holds a key that is not a valid player name.
    #[error("whitelist document contains invalid entry {name:?}: {reason}")]
    InvalidEntry {
        /// Offending key as found in the document.
        name: String,
        /// Why it was refused.
        reason: NameError,
    },

    /// The containing directory could not be created.
    #[error("failed to create whitelist directory {}: {source}", .path.display())]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing or replacing the document failed.
    #[error("failed to write whitelist document {}: {source}", .path.display())]
    Write {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The mapping could not be encoded.
    #[error("failed to serialize whitelist document: {0}")]
    Serialize(String),

    /// Backend refused the operation (non-file backends).
    #[error("whitelist storage unavailable: {0}")]
    Unavailable(String),
}
