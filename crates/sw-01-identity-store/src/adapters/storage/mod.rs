//! Storage Adapters
//!
//! Implementations of the `DocumentStorage` trait.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::InMemoryStorage;
