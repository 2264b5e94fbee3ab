//! # Whitelist Gateway Service
//!
//! Implements the admission hook and the administrative operations on top
//! of a shared [`IdentityStore`].

use crate::adapters::events::TracingEventSink;
use crate::domain::{
    evaluate, AdminError, AdmissionDecision, AdmissionOutcome, AdmitPath, GatewayConfig,
    RejectReason, Rejection, WhitelistEvent,
};
use crate::ports::inbound::{AdmissionApi, WhitelistAdminApi};
use crate::ports::outbound::WhitelistEventSink;
use shared_types::{IdentitySlot, PlayerIdentity, PlayerName};
use std::sync::Arc;
use sw_01_identity_store::{
    DocumentStorage, FlushStatus, IdentityStore, IdentityStoreApi, WhitelistDocument,
};
use tracing::{debug, warn};


/// Admission policy and administrative operations over one identity store.
pub struct WhitelistGateway<S: DocumentStorage, E: WhitelistEventSink = TracingEventSink> {
    store: Arc<IdentityStore<S>>,
    events: E,
    config: GatewayConfig,
}

impl<S: DocumentStorage> WhitelistGateway<S, TracingEventSink> {
    /// Gateway that reports events to the log.
    pub fn new(store: Arc<IdentityStore<S>>, config: GatewayConfig) -> Self {
        Self::with_event_sink(store, TracingEventSink, config)
    }
}

impl<S: DocumentStorage, E: WhitelistEventSink> WhitelistGateway<S, E> {
    pub fn with_event_sink(store: Arc<IdentityStore<S>>, events: E, config: GatewayConfig) -> Self {
        Self {
            store,
            events,
            config,
        }
    }

    pub fn store(&self) -> &Arc<IdentityStore<S>> {
        &self.store
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn reject(&self, name: &str, identity: &str, reason: RejectReason) -> AdmissionDecision {
        self.events.publish(WhitelistEvent::AdmissionRejected {
            name: name.to_string(),
            identity: identity.to_string(),
            reason,
        });
        let message = match reason {
            RejectReason::IdentityMismatch => self.config.messages.identity_mismatch.clone(),
            RejectReason::NotWhitelisted | RejectReason::MalformedPrincipal => {
                self.config.messages.not_whitelisted.clone()
            }
        };
        AdmissionDecision::Reject(Rejection { reason, message })
    }

    /// Report a failed flush. Never alters the caller's result.
    fn report_flush(&self, operation: &'static str, flush: FlushStatus) {
        if let FlushStatus::Failed(e) = flush {
            self.events.publish(WhitelistEvent::FlushFailed {
                operation,
                error: e.to_string(),
            });
        }
    }
}

impl<S: DocumentStorage, E: WhitelistEventSink> AdmissionApi for WhitelistGateway<S, E> {
    fn admit(&self, name: &str, identity: &str) -> AdmissionDecision {
        let (player, token) = match (PlayerName::new(name), PlayerIdentity::new(identity)) {
            (Ok(player), Ok(token)) => (player, token),
            (Err(e), _) | (_, Err(e)) => {
                warn!("[sw-02] Connection layer supplied an invalid principal: {e}");
                return self.reject(name, identity, RejectReason::MalformedPrincipal);
            }
        };

        // Steady state: matching binding, read lock only.
        if self
            .store
            .get(player.as_str())
            .is_some_and(|slot| slot.is_bound_to(token.as_str()))
        {
            debug!("[sw-02] {player} verified");
            return AdmissionDecision::Admit(AdmitPath::Verified);
        }

        let commit = self.store.transact(|tx| evaluate(tx, &player, &token));

        let decision = match commit.outcome {
            AdmissionOutcome::FirstJoin => {
                self.events.publish(WhitelistEvent::IdentityBound {
                    name: player,
                    identity: token,
                });
                AdmissionDecision::Admit(AdmitPath::FirstJoin)
            }
            AdmissionOutcome::Verified => AdmissionDecision::Admit(AdmitPath::Verified),
            AdmissionOutcome::Renamed { previous_names } => {
                self.events.publish(WhitelistEvent::AliasAdopted {
                    name: player,
                    identity: token,
                    previous_names,
                });
                AdmissionDecision::Admit(AdmitPath::Renamed)
            }
            AdmissionOutcome::IdentityMismatch { .. } => {
                self.reject(name, identity, RejectReason::IdentityMismatch)
            }
            AdmissionOutcome::NotWhitelisted => {
                self.reject(name, identity, RejectReason::NotWhitelisted)
            }
        };

        self.report_flush("admission", commit.flush);
        decision
    }
}

impl<S: DocumentStorage, E: WhitelistEventSink> WhitelistAdminApi for WhitelistGateway<S, E> {
    fn add_player(&self, name: &str) -> Result<(), AdminError> {
        let player = PlayerName::new(name)?;

        let commit = self.store.transact(|tx| {
            if tx.contains_name(player.as_str()) {
                return Err(AdminError::AlreadyWhitelisted(player.clone()));
            }
            tx.put(player.clone(), IdentitySlot::Pending);
            Ok(())
        });
        commit.outcome?;

        self.events.publish(WhitelistEvent::PlayerAdded { name: player });
        self.report_flush("add", commit.flush);
        Ok(())
    }

    fn remove_player(&self, name: &str) -> Result<(), AdminError> {
        let player = PlayerName::new(name)?;

        let commit = self.store.transact(|tx| tx.remove(player.as_str()));
        let Some(previous) = commit.outcome else {
            return Err(AdminError::NotWhitelisted(player));
        };

        self.events.publish(WhitelistEvent::PlayerRemoved {
            name: player,
            previous,
        });
        self.report_flush("remove", commit.flush);
        Ok(())
    }

    fn list_players(&self) -> WhitelistDocument {
        self.store.snapshot()
    }
}
