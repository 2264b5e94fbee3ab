//! # Decision-Tree Properties
//!
//! Random whitelists and random connection sequences, drawn from a small
//! alphabet so names and identities collide often.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;
    use sw_01_identity_store::{IdentityStore, IdentityStoreApi, InMemoryStorage, WhitelistDocument};
    use sw_02_whitelist_gateway::{
        AdmissionApi, AdmissionDecision, AdmitPath, GatewayConfig, RecordingEventSink,
        WhitelistAdminApi, WhitelistGateway,
    };

    // -------------------------------------------------------------------------
    // Strategies
    // -------------------------------------------------------------------------

    fn arb_name() -> impl Strategy<Value = String> {
        prop_oneof![Just("alice"), Just("bob"), Just("carol"), Just("dave"), Just("Eve")]
            .prop_map(str::to_string)
    }

    fn arb_identity() -> impl Strategy<Value = String> {
        prop_oneof![Just("u1"), Just("u2"), Just("u3"), Just("u4")].prop_map(str::to_string)
    }

    /// Entry value: pending placeholder or a bound identity.
    fn arb_slot() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), arb_identity()]
    }

    fn arb_document() -> impl Strategy<Value = WhitelistDocument> {
        prop::collection::btree_map(arb_name(), arb_slot(), 0..5)
            .prop_map(|entries| entries.into_iter().collect())
    }

    fn arb_connections() -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec((arb_name(), arb_identity()), 1..12)
    }

    fn gateway(document: WhitelistDocument) -> WhitelistGateway<InMemoryStorage, RecordingEventSink> {
        let store = IdentityStore::load(InMemoryStorage::with_document(document)).unwrap();
        WhitelistGateway::with_event_sink(
            Arc::new(store),
            RecordingEventSink::new(),
            GatewayConfig::default(),
        )
    }

    // -------------------------------------------------------------------------
    // Property Tests
    // -------------------------------------------------------------------------

    proptest! {
        /// Admission only ever adds bindings: no name disappears and no bound
        /// name changes identity.
        #[test]
        fn admission_never_rebinds_or_removes(
            document in arb_document(),
            connections in arb_connections(),
        ) {
            let gateway = gateway(document);

            for (name, identity) in connections {
                let before = gateway.list_players();
                let _ = gateway.admit(&name, &identity);
                let after = gateway.list_players();

                for (name, value) in before.entries() {
                    let now = after.get(name);
                    prop_assert!(now.is_some(), "{name} disappeared");
                    if !value.is_empty() {
                        prop_assert_eq!(now, Some(value));
                    }
                }
            }
        }

        /// Admitted means bound to the presented identity afterwards;
        /// rejected means the store did not change.
        #[test]
        fn decision_matches_store_effect(
            document in arb_document(),
            connections in arb_connections(),
        ) {
            let gateway = gateway(document);

            for (name, identity) in connections {
                let before = gateway.list_players();
                let decision = gateway.admit(&name, &identity);
                let after = gateway.list_players();

                match decision {
                    AdmissionDecision::Admit(_) => {
                        prop_assert_eq!(after.get(&name), Some(identity.as_str()));
                    }
                    AdmissionDecision::Reject(_) => {
                        prop_assert_eq!(&after, &before);
                    }
                }
            }
        }

        /// Once admitted, the same pair is always verified and never mutates.
        #[test]
        fn admitted_pair_is_idempotent(
            document in arb_document(),
            name in arb_name(),
            identity in arb_identity(),
        ) {
            let gateway = gateway(document);

            if gateway.admit(&name, &identity).is_admitted() {
                let saves = gateway.store().storage().save_count();
                let snapshot = gateway.list_players();

                prop_assert_eq!(
                    gateway.admit(&name, &identity),
                    AdmissionDecision::Admit(AdmitPath::Verified)
                );
                prop_assert_eq!(gateway.store().storage().save_count(), saves);
                prop_assert_eq!(gateway.list_players(), snapshot);
            }
        }

        /// The persisted copy equals memory after every admission.
        #[test]
        fn persisted_copy_tracks_memory(
            document in arb_document(),
            connections in arb_connections(),
        ) {
            let gateway = gateway(document);

            for (name, identity) in connections {
                let _ = gateway.admit(&name, &identity);
                prop_assert_eq!(
                    gateway.store().storage().document(),
                    Some(gateway.store().snapshot())
                );
            }
        }
    }
}
