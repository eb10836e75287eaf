//! # API crate: REST client for the notes backend
//!
//! This crate holds everything the frontends need to talk to the notes backend and
//! keep the client session consistent with its answers. It has no UI dependencies;
//! the `ui` crate wires it into Dioxus context.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | [`Transport`] seam and the reqwest-backed [`HttpTransport`] |
//! | [`client`] | [`ApiClient`]: bearer attachment, status classification, envelope parsing |
//! | [`error`] | [`ApiError`] (HTTP boundary) and [`ClientError`] (what the user is told) |
//! | [`models`] | Wire envelopes: `{data}` success wrapper, `{message}` error body, auth payload |
//! | [`auth`] | [`AuthController`]: login, signup, logout, profile refresh, forced logout on 401 |
//! | [`notes`] | [`NotesManager`]: list/create/update/delete with a session-scoped in-memory list |
//!
//! ## Wiring
//!
//! ```ignore
//! let session = store::SessionStore::initialize(token_store);
//! let client = api::ApiClient::new(api::HttpTransport::new(), base_url, session);
//! let auth = api::AuthController::new(client);
//! let notes = api::NotesManager::new(auth.clone());
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod notes;
pub mod transport;

#[cfg(test)]
mod testing;

pub use auth::{AuthController, AuthPhase, Credentials, Registration};
pub use client::{ApiClient, Response};
pub use error::{ApiError, ClientError};
pub use notes::{DeleteOutcome, NoteFields, NotesManager};
pub use transport::{HttpTransport, Method, Transport};

pub use store::{Note, Session, SessionStore, UserProfile};
