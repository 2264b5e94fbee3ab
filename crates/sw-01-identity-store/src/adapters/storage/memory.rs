use crate::domain::{PersistenceError, WhitelistDocument};
use crate::ports::outbound::DocumentStorage;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory document storage for unit tests.
///
/// Can be switched into a failing mode to exercise the flush-failure path.
#[derive(Default)]
pub struct InMemoryStorage {
    document: Mutex<Option<WhitelistDocument>>,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already persisted document.
    pub fn with_document(document: WhitelistDocument) -> Self {
        Self {
            document: Mutex::new(Some(document)),
            ..Self::default()
        }
    }

    /// Make every subsequent `save` fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Last successfully saved document.
    pub fn document(&self) -> Option<WhitelistDocument> {
        self.document.lock().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl DocumentStorage for InMemoryStorage {
    fn load(&self) -> Result<Option<WhitelistDocument>, PersistenceError> {
        Ok(self.document.lock().clone())
    }

    fn save(&self, document: &WhitelistDocument) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Unavailable(
                "write failure injected".to_string(),
            ));
        }
        *self.document.lock() = Some(document.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
