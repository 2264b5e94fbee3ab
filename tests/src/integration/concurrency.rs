//! # Concurrency Tests
//!
//! Admission runs on connection threads while administrators issue commands.
//! Every read-check-mutate sequence must behave as if run alone.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Barrier};
    use std::thread;

    use sw_01_identity_store::{IdentityStore, IdentityStoreApi, InMemoryStorage, JsonFileStorage};
    use sw_02_whitelist_gateway::{
        AdmissionApi, AdmissionDecision, AdmitPath, GatewayConfig, RecordingEventSink,
        RejectReason, WhitelistAdminApi, WhitelistGateway,
    };

    fn memory_gateway() -> Arc<WhitelistGateway<InMemoryStorage, RecordingEventSink>> {
        let store = IdentityStore::load(InMemoryStorage::new()).unwrap();
        Arc::new(WhitelistGateway::with_event_sink(
            Arc::new(store),
            RecordingEventSink::new(),
            GatewayConfig::default(),
        ))
    }

    #[test]
    fn test_racing_first_joins_bind_exactly_one_identity() {
        const CONTENDERS: usize = 16;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whitelist.json");
        let store = Arc::new(IdentityStore::load(JsonFileStorage::new(&path)).unwrap());
        let gateway = Arc::new(WhitelistGateway::with_event_sink(
            Arc::clone(&store),
            RecordingEventSink::new(),
            GatewayConfig::default(),
        ));
        gateway.add_player("alice").unwrap();

        let barrier = Arc::new(Barrier::new(CONTENDERS));
        let handles: Vec<_> = (0..CONTENDERS)
            .map(|i| {
                let gateway = Arc::clone(&gateway);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let identity = format!("u{i}");
                    barrier.wait();
                    (identity.clone(), gateway.admit("alice", &identity))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let winners: Vec<_> = results
            .iter()
            .filter(|(_, decision)| *decision == AdmissionDecision::Admit(AdmitPath::FirstJoin))
            .collect();
        assert_eq!(winners.len(), 1);

        let losers = results
            .iter()
            .filter(|(_, d)| d.reject_reason() == Some(RejectReason::IdentityMismatch))
            .count();
        assert_eq!(losers, CONTENDERS - 1);

        let winner = &winners[0].0;
        assert!(store.get("alice").unwrap().is_bound_to(winner));

        let on_disk =
            sw_01_identity_store::WhitelistDocument::from_json_slice(&std::fs::read(&path).unwrap())
                .unwrap();
        assert_eq!(on_disk, store.snapshot());
    }

    #[test]
    fn test_concurrent_adds_of_same_name_succeed_once() {
        const ADMINS: usize = 8;

        let gateway = memory_gateway();
        let barrier = Arc::new(Barrier::new(ADMINS));

        let handles: Vec<_> = (0..ADMINS)
            .map(|_| {
                let gateway = Arc::clone(&gateway);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    gateway.add_player("alice").is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(gateway.store().len(), 1);
    }

    #[test]
    fn test_admissions_and_admin_interleave_consistently() {
        const PLAYERS: usize = 20;

        let gateway = memory_gateway();
        for i in 0..PLAYERS {
            gateway.add_player(&format!("player{i}")).unwrap();
        }

        let joiners: Vec<_> = (0..PLAYERS)
            .map(|i| {
                let gateway = Arc::clone(&gateway);
                thread::spawn(move || {
                    for _ in 0..10 {
                        let decision = gateway.admit(&format!("player{i}"), &format!("id{i}"));
                        assert!(decision.is_admitted());
                    }
                })
            })
            .collect();

        let admin = {
            let gateway = Arc::clone(&gateway);
            thread::spawn(move || {
                for i in 0..PLAYERS {
                    gateway.add_player(&format!("extra{i}")).unwrap();
                }
            })
        };

        for handle in joiners {
            handle.join().unwrap();
        }
        admin.join().unwrap();

        let document = gateway.list_players();
        assert_eq!(document.len(), PLAYERS * 2);
        for i in 0..PLAYERS {
            let expected = format!("id{i}");
            assert_eq!(document.get(&format!("player{i}")), Some(expected.as_str()));
            assert_eq!(document.get(&format!("extra{i}")), Some(""));
        }
        // Memory and the persisted copy agree once everything settles.
        assert_eq!(gateway.store().storage().document(), Some(document));
    }
}
