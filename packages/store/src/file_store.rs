//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] is a [`TokenStore`] implementation that keeps the bearer
//! token in a single file. It is used on native builds so a session survives
//! app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <token_key>      # file containing the raw token string
//! ```
//!
//! ## Platform data directories
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/notebook/` |
//! | Linux | `~/.local/share/notebook/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\notebook\` |
//!
//! I/O errors are swallowed: an unreadable file reads as "no token", which
//! simply sends the user to the login view.

use std::path::PathBuf;

use crate::token::{TokenStore, DEFAULT_TOKEN_KEY};

/// Filesystem-backed TokenStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
    key: String,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self::with_key(base, DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(base: PathBuf, key: &str) -> Self {
        Self {
            base,
            key: key.to_string(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn save(&self, token: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.token_path(), token);
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("notebook_token_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileTokenStore::new(dir.clone());
        assert!(store.load().is_none());

        store.save("secret-token");

        // Re-open from same directory
        let store2 = FileTokenStore::new(dir.clone());
        assert_eq!(store2.load().as_deref(), Some("secret-token"));

        store2.clear();
        assert!(store.load().is_none());

        // Clearing twice is harmless
        store.clear();

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_custom_key() {
        let dir = std::env::temp_dir().join(format!("notebook_token_key_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileTokenStore::with_key(dir.clone(), "other_key");
        store.save("abc");
        assert!(dir.join("other_key").exists());
        assert!(FileTokenStore::new(dir.clone()).load().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
