use std::sync::{Arc, Mutex, PoisonError};

use crate::token::TokenStore;

/// In-memory TokenStore for testing.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the session persisted.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<Vec<Option<String>>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if persisted by an earlier run.
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        *store.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        store
    }

    /// Every write seen so far: `Some(token)` for a save, `None` for a clear.
    pub fn writes(&self) -> Vec<Option<String>> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, value: Option<String>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = value.clone();
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save(&self, token: &str) {
        self.record(Some(token.to_string()));
    }

    fn clear(&self) {
        self.record(None);
    }
}
