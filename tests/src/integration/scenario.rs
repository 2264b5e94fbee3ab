//! # Whitelist Scenarios
//!
//! End-to-end flows through the gateway with the JSON document on disk,
//! checking after every step that the file mirrors memory.

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::sync::Arc;

    use sw_01_identity_store::{IdentityStore, IdentityStoreApi, JsonFileStorage, WhitelistDocument};
    use sw_02_whitelist_gateway::{
        AdmissionApi, AdmissionDecision, AdmitPath, GatewayConfig, RecordingEventSink,
        RejectReason, WhitelistAdminApi, WhitelistEvent, WhitelistGateway,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    type FileGateway = WhitelistGateway<JsonFileStorage, RecordingEventSink>;

    fn open(path: &Path) -> FileGateway {
        let store = IdentityStore::load(JsonFileStorage::new(path)).unwrap();
        WhitelistGateway::with_event_sink(
            Arc::new(store),
            RecordingEventSink::new(),
            GatewayConfig::default(),
        )
    }

    fn on_disk(path: &Path) -> WhitelistDocument {
        WhitelistDocument::from_json_slice(&fs::read(path).unwrap()).unwrap()
    }

    fn assert_mirrored(gateway: &FileGateway, path: &Path) {
        assert_eq!(on_disk(path), gateway.list_players());
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    #[test]
    fn test_full_lifecycle_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mods/swhitelist/whitelist.json");

        let gateway = open(&path);
        assert_mirrored(&gateway, &path);

        gateway.add_player("alice").unwrap();
        assert_mirrored(&gateway, &path);

        assert_eq!(
            gateway.admit("alice", "u1"),
            AdmissionDecision::Admit(AdmitPath::FirstJoin)
        );
        assert_mirrored(&gateway, &path);

        assert_eq!(
            gateway.admit("alice", "u2").reject_reason(),
            Some(RejectReason::IdentityMismatch)
        );
        assert_eq!(
            gateway.admit("bob", "u1"),
            AdmissionDecision::Admit(AdmitPath::Renamed)
        );
        assert_mirrored(&gateway, &path);
        drop(gateway);

        // Restart: bindings made before are enforced after.
        let gateway = open(&path);
        assert_eq!(gateway.store().len(), 2);
        assert_eq!(
            gateway.admit("alice", "u1"),
            AdmissionDecision::Admit(AdmitPath::Verified)
        );
        assert_eq!(
            gateway.admit("bob", "u2").reject_reason(),
            Some(RejectReason::IdentityMismatch)
        );
    }

    #[test]
    fn test_hand_edited_document_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whitelist.json");
        fs::write(&path, r#"{ "Steve": "", "Alex": "u7" }"#).unwrap();

        let gateway = open(&path);

        assert!(gateway.admit("Steve", "u1").is_admitted());
        assert_eq!(
            gateway.admit("Alex", "u1").reject_reason(),
            Some(RejectReason::IdentityMismatch)
        );
        // Names are case-sensitive.
        assert_eq!(
            gateway.admit("steve", "u9").reject_reason(),
            Some(RejectReason::NotWhitelisted)
        );
        assert_eq!(on_disk(&path).get("Steve"), Some("u1"));
    }

    #[test]
    fn test_unparseable_document_blocks_startup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whitelist.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(IdentityStore::load(JsonFileStorage::new(&path)).is_err());
        // The operator's file is left alone.
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_remove_then_readd_resets_binding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whitelist.json");
        let gateway = open(&path);

        gateway.add_player("alice").unwrap();
        assert!(gateway.admit("alice", "u1").is_admitted());

        gateway.remove_player("alice").unwrap();
        gateway.add_player("alice").unwrap();

        // A fresh placeholder binds whichever identity arrives first.
        assert_eq!(
            gateway.admit("alice", "u2"),
            AdmissionDecision::Admit(AdmitPath::FirstJoin)
        );
        assert_eq!(on_disk(&path).get("alice"), Some("u2"));
    }

    #[test]
    fn test_events_tell_the_story() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = open(&dir.path().join("whitelist.json"));

        gateway.add_player("alice").unwrap();
        let _ = gateway.admit("alice", "u1");
        let _ = gateway.admit("mallory", "u9");
        gateway.remove_player("alice").unwrap();

        let kinds: Vec<&str> = gateway
            .events()
            .events()
            .iter()
            .map(|event| match event {
                WhitelistEvent::PlayerAdded { .. } => "added",
                WhitelistEvent::IdentityBound { .. } => "bound",
                WhitelistEvent::AliasAdopted { .. } => "alias",
                WhitelistEvent::AdmissionRejected { .. } => "rejected",
                WhitelistEvent::PlayerRemoved { .. } => "removed",
                WhitelistEvent::FlushFailed { .. } => "flush-failed",
            })
            .collect();
        assert_eq!(kinds, vec!["added", "bound", "rejected", "removed"]);
    }
}
