//! # Adapters Module
//!
//! - `storage`: `DocumentStorage` implementations (JSON file, in-memory)

pub mod storage;
