//! # Outbound Ports
//!
//! Event reporting. Publishing must not block or fail: it runs after the
//! decision is made and cannot change it.

use crate::domain::WhitelistEvent;

/// Receiver of whitelist events.
pub trait WhitelistEventSink: Send + Sync {
    fn publish(&self, event: WhitelistEvent);
}
