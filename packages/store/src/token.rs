//! # Token persistence seam
//!
//! [`TokenStore`] is the single durable key the client keeps between runs: the
//! bearer token string. Absence means "signed out"; presence says nothing about
//! whether the backend still accepts the token.
//!
//! Implementations live in sibling modules:
//!
//! | Backend | Module | Used by |
//! |---------|--------|---------|
//! | [`MemoryTokenStore`](crate::MemoryTokenStore) | `memory` | tests |
//! | [`FileTokenStore`](crate::FileTokenStore) | `file_store` | native builds |
//! | `LocalStorageStore` | `local` | web builds (`window.localStorage`) |

/// Default storage key for the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "auth_token";

/// Durable storage for the session token.
///
/// Only [`SessionStore`](crate::SessionStore) writes through this trait.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);
    /// Remove the persisted token.
    fn clear(&self);
}
