//! # Ports
//!
//! - `inbound`: what the store offers its callers
//! - `outbound`: what the store needs from a storage backend

pub mod inbound;
pub mod outbound;
