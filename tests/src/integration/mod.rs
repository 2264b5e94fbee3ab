//! # Cross-Crate Integration Tests

pub mod concurrency;
pub mod properties;
pub mod scenario;
