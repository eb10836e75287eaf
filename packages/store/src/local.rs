//! # localStorage token store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. It keeps
//! the bearer token under a single key of `window.localStorage`, so a reload or a
//! new tab picks the session back up.
//!
//! All methods silently swallow errors (no window, storage disabled, quota). A
//! missing token degrades to the signed-out state rather than crashing.

use web_sys::Storage;

use crate::token::{TokenStore, DEFAULT_TOKEN_KEY};

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for LocalStorageStore {
    fn load(&self) -> Option<String> {
        let token = Self::storage()?.get_item(&self.key).ok().flatten()?;
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(&self.key, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
