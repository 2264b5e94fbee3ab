//! # Ports
//!
//! - `inbound`: admission hook and administrative operations
//! - `outbound`: event reporting

pub mod inbound;
pub mod outbound;
