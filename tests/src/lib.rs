//! # swhitelist Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenario.rs      # store + gateway against a real file
//!     ├── concurrency.rs   # racing admissions and admin commands
//!     └── properties.rs    # decision-tree properties (proptest)
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p sw-tests
//! cargo test -p sw-tests integration::properties
//!
//! # Benchmarks
//! cargo bench -p sw-tests
//! ```

pub mod integration;
