//! Event Sink Adapters
//!
//! - `TracingEventSink`: production sink, turns events into log lines
//! - `RecordingEventSink`: keeps events in memory for assertions

use crate::domain::WhitelistEvent;
use crate::ports::outbound::WhitelistEventSink;
use parking_lot::Mutex;
use tracing::{error, info, warn};

/// Logs every event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl WhitelistEventSink for TracingEventSink {
    fn publish(&self, event: WhitelistEvent) {
        match event {
            WhitelistEvent::IdentityBound { name, identity } => {
                info!(
                    player = %name,
                    identity = %identity,
                    "[sw-02] First join of {name}, identity recorded"
                );
            }
            WhitelistEvent::AliasAdopted {
                name,
                identity,
                previous_names,
            } => {
                let previous: Vec<&str> = previous_names.iter().map(|n| n.as_str()).collect();
                info!(
                    player = %name,
                    identity = %identity,
                    "[sw-02] Identity of {name} updated (also held by: {})",
                    previous.join(", ")
                );
            }
            WhitelistEvent::AdmissionRejected {
                name,
                identity,
                reason,
            } => {
                warn!(
                    player = %name,
                    identity = %identity,
                    "[sw-02] Rejected connection: {reason}"
                );
            }
            WhitelistEvent::PlayerAdded { name } => {
                info!(player = %name, "[sw-02] Added {name} to the whitelist");
            }
            WhitelistEvent::PlayerRemoved { name, previous } => {
                info!(
                    player = %name,
                    identity = %previous,
                    "[sw-02] Removed {name} from the whitelist"
                );
            }
            WhitelistEvent::FlushFailed { operation, error } => {
                error!(
                    operation,
                    "[sw-02] Failed to save whitelist, change kept in memory only: {error}"
                );
            }
        }
    }
}

/// In-memory sink for unit tests.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<WhitelistEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything published so far.
    pub fn events(&self) -> Vec<WhitelistEvent> {
        self.events.lock().clone()
    }

    /// Drain recorded events.
    pub fn take(&self) -> Vec<WhitelistEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl WhitelistEventSink for RecordingEventSink {
    fn publish(&self, event: WhitelistEvent) {
        self.events.lock().push(event);
    }
}
