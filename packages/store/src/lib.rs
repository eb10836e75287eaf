//! Client-side state for the notes app: domain models, the session store and
//! its token persistence backends, the in-memory notes collection, and client
//! configuration.

pub mod collection;
pub mod config;
pub mod models;
pub mod session;
pub mod token;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use collection::NotesCollection;
pub use config::ClientConfig;
pub use models::{Note, UserProfile};
pub use session::{Session, SessionStore};
pub use token::{TokenStore, DEFAULT_TOKEN_KEY};
