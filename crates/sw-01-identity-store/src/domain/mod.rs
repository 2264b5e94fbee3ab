//! # Domain Module
//!
//! Core types of the identity store.

pub mod document;
pub mod errors;
pub mod table;

pub use document::WhitelistDocument;
pub use errors::PersistenceError;
pub use table::IdentityTable;
