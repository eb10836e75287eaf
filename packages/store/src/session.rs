//! # Session Store: process-wide auth state
//!
//! [`SessionStore`] owns the client's proof of authentication: the bearer token and
//! the cached [`UserProfile`]. It is the only writer of the persisted token, and all
//! token persistence happens inside [`save`](SessionStore::save) and
//! [`clear`](SessionStore::clear), through the injected [`TokenStore`].
//!
//! ## Lifecycle
//!
//! | Step | Method | Effect |
//! |------|--------|--------|
//! | startup | [`initialize`](SessionStore::initialize) | token loaded eagerly from durable storage, no user yet |
//! | login / signup | [`save`](SessionStore::save) | token persisted, user cached |
//! | profile refresh | [`set_user`](SessionStore::set_user) | user replaced wholesale, token untouched |
//! | logout / 401 | [`clear`](SessionStore::clear) | token removed from storage, user dropped |
//!
//! ## Generations
//!
//! Each `save`/`clear` bumps a generation counter. Session-scoped caches (the notes
//! collection, in-flight profile fetches) remember the generation they were built
//! under and discard their data once it moves on.
//!
//! Handles are cheap to clone and share the same state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::UserProfile;
use crate::token::TokenStore;

/// Snapshot of the client session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// Authenticated means "a token is held", nothing more.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Debug, Default)]
struct SessionState {
    session: Session,
    generation: u64,
}

struct Inner<S> {
    storage: S,
    state: Mutex<SessionState>,
}

/// Shared holder of the session token and profile.
pub struct SessionStore<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: TokenStore> SessionStore<S> {
    /// Create the store, reading any persisted token from `storage`.
    pub fn initialize(storage: S) -> Self {
        let token = storage.load().filter(|t| !t.is_empty());
        Self {
            inner: Arc::new(Inner {
                storage,
                state: Mutex::new(SessionState {
                    session: Session { token, user: None },
                    generation: 0,
                }),
            }),
        }
    }

    /// Replace the session.
    ///
    /// A present, non-empty token is persisted and becomes the authenticated
    /// session together with `user`. An absent or empty token clears storage and
    /// leaves the session unauthenticated with no user.
    pub fn save(&self, token: Option<String>, user: Option<UserProfile>) {
        let mut state = self.lock();
        match token.filter(|t| !t.is_empty()) {
            Some(token) => {
                self.inner.storage.save(&token);
                state.session = Session {
                    token: Some(token),
                    user,
                };
            }
            None => {
                self.inner.storage.clear();
                state.session = Session::default();
            }
        }
        state.generation += 1;
    }

    /// Drop the session and the persisted token.
    pub fn clear(&self) {
        self.save(None, None);
    }

    /// Replace the cached profile without touching the token.
    ///
    /// Ignored when signed out, so a late profile response cannot resurrect
    /// a user on an empty session.
    pub fn set_user(&self, user: UserProfile) {
        let mut state = self.lock();
        if state.session.is_authenticated() {
            state.session.user = Some(user);
        }
    }
}

impl<S> SessionStore<S> {
    pub fn snapshot(&self) -> Session {
        self.lock().session.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().session.token.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.lock().session.user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().session.is_authenticated()
    }

    /// Counter bumped on every `save`/`clear`.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTokenStore;

    fn user(name: &str) -> UserProfile {
        UserProfile {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_initialize_without_token() {
        let session = SessionStore::initialize(MemoryTokenStore::new());
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert_eq!(session.generation(), 0);
    }

    #[test]
    fn test_initialize_loads_persisted_token() {
        let session = SessionStore::initialize(MemoryTokenStore::with_token("t0"));
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("t0"));
        // Profile is fetched later, never persisted
        assert!(session.user().is_none());
    }

    #[test]
    fn test_save_persists_and_authenticates() {
        let storage = MemoryTokenStore::new();
        let session = SessionStore::initialize(storage.clone());

        session.save(Some("t1".to_string()), Some(user("A")));

        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("t1"));
        assert_eq!(session.user().unwrap().name, "A");
        assert_eq!(storage.load().as_deref(), Some("t1"));
        assert_eq!(storage.writes(), vec![Some("t1".to_string())]);
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_save_none_clears_storage_and_user() {
        let storage = MemoryTokenStore::with_token("t0");
        let session = SessionStore::initialize(storage.clone());

        session.save(None, Some(user("ignored")));

        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let storage = MemoryTokenStore::with_token("t0");
        let session = SessionStore::initialize(storage.clone());

        session.save(Some(String::new()), Some(user("A")));

        assert!(!session.is_authenticated());
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_clear_matches_save_none() {
        let storage = MemoryTokenStore::new();
        let session = SessionStore::initialize(storage.clone());
        session.save(Some("t1".to_string()), Some(user("A")));

        session.clear();

        assert_eq!(session.snapshot(), Session::default());
        assert!(storage.load().is_none());
        assert_eq!(session.generation(), 2);
    }

    #[test]
    fn test_set_user_keeps_token() {
        let session = SessionStore::initialize(MemoryTokenStore::with_token("t0"));
        let generation = session.generation();

        session.set_user(user("Fresh"));

        assert_eq!(session.token().as_deref(), Some("t0"));
        assert_eq!(session.user().unwrap().name, "Fresh");
        assert_eq!(session.generation(), generation);
    }

    #[test]
    fn test_set_user_ignored_when_signed_out() {
        let session = SessionStore::initialize(MemoryTokenStore::new());
        session.set_user(user("Ghost"));
        assert!(session.user().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let session = SessionStore::initialize(MemoryTokenStore::new());
        let handle = session.clone();

        handle.save(Some("shared".to_string()), None);

        assert_eq!(session.token().as_deref(), Some("shared"));
        // Authenticated is exactly "token present", even without a user
        assert!(session.snapshot().is_authenticated());
    }
}
