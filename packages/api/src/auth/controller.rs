//! # Auth Flow Controller
//!
//! [`AuthController`] drives the session through its states:
//!
//! ```text
//! Unauthenticated ──login/signup──▶ Authenticating ──ok──▶ Authenticated
//!        ▲                               │ fail                  │
//!        └───────────────────────────────┘◀──── logout / 401 ────┘
//! ```
//!
//! | Operation | Network | Session effect |
//! |-----------|---------|----------------|
//! | [`login`](AuthController::login) | `POST /auth/login` | `save(token, user)` on success, untouched on failure |
//! | [`signup`](AuthController::signup) | `POST /auth/signup` (after local validation) | same as login |
//! | [`logout`](AuthController::logout) | none | `clear()` |
//! | [`refresh_profile`](AuthController::refresh_profile) | `GET /auth/profile` | user replaced; `clear()` on 401 only |
//! | [`expire_session`](AuthController::expire_session) | none | `clear()`, used for 401s from any authenticated call |
//!
//! Duplicate submissions are not deduplicated here; views disable their submit
//! button while [`phase`](AuthController::phase) is `Authenticating`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use store::{Session, SessionStore, TokenStore, UserProfile};

use super::forms::{Credentials, Registration};
use super::{LOGIN_PATH, PROFILE_PATH, SIGNUP_PATH};
use crate::client::ApiClient;
use crate::error::{ApiError, ClientError};
use crate::models::AuthData;
use crate::transport::{Method, Transport};

const LOGIN_FAILED: &str = "Unable to login. Please try again.";
const SIGNUP_FAILED: &str = "Unable to sign up right now.";
const PROFILE_FAILED: &str = "Failed to fetch profile";

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

/// Orchestrates credential submission and keeps the session store in step
/// with the backend's answers.
pub struct AuthController<T, S> {
    client: ApiClient<T, S>,
    in_flight: Arc<AtomicUsize>,
}

impl<T, S> Clone for AuthController<T, S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

/// Marks a credential request as in flight until dropped.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl<T, S> AuthController<T, S> {
    pub fn new(client: ApiClient<T, S>) -> Self {
        Self {
            client,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn client(&self) -> &ApiClient<T, S> {
        &self.client
    }

    pub fn session(&self) -> &SessionStore<S> {
        self.client.session()
    }

    pub fn phase(&self) -> AuthPhase {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            AuthPhase::Authenticating
        } else if self.session().is_authenticated() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }
}

impl<T: Transport, S: TokenStore> AuthController<T, S> {
    /// Exchange credentials for a session.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, ClientError> {
        let body = serde_json::to_value(credentials)
            .map_err(|_| ClientError::Request(LOGIN_FAILED.to_string()))?;
        self.authenticate(LOGIN_PATH, body, LOGIN_FAILED).await
    }

    /// Create an account and sign in with it.
    ///
    /// The form is validated first; a validation failure sends nothing.
    pub async fn signup(&self, registration: &Registration) -> Result<Session, ClientError> {
        let request = registration.validate()?;
        let body = serde_json::to_value(&request)
            .map_err(|_| ClientError::Request(SIGNUP_FAILED.to_string()))?;
        self.authenticate(SIGNUP_PATH, body, SIGNUP_FAILED).await
    }

    async fn authenticate(
        &self,
        path: &str,
        body: serde_json::Value,
        default: &str,
    ) -> Result<Session, ClientError> {
        let _in_flight = InFlight::enter(&self.in_flight);

        let data: AuthData = self
            .client
            .request(Method::Post, path, Some(body))
            .await
            .and_then(|response| response.data())
            .map_err(|e| ClientError::from_api(e, default))?;

        let Some(token) = data.token.filter(|t| !t.is_empty()) else {
            tracing::warn!(path, "auth response carried no token");
            return Err(ClientError::Request(default.to_string()));
        };

        self.session().save(Some(token), data.user);
        tracing::info!(path, "session established");
        Ok(self.session().snapshot())
    }

    /// Sign out locally. The backend is not told.
    pub fn logout(&self) {
        self.session().clear();
        tracing::info!("signed out");
    }

    /// Forced logout after a 401 from an authenticated endpoint.
    ///
    /// `generation` is the session generation the failing request was sent
    /// under. If a newer session has been established since, it is left alone
    /// and [`ClientError::Superseded`] is returned instead.
    pub fn expire_session(&self, generation: u64) -> ClientError {
        let session = self.session();
        if session.generation() != generation && session.is_authenticated() {
            tracing::debug!("401 for a previous session, keeping the current one");
            return ClientError::Superseded;
        }
        if session.is_authenticated() {
            tracing::warn!("session rejected by backend, signing out");
            session.clear();
        }
        ClientError::SessionExpired
    }

    /// Re-fetch the profile for the held token.
    ///
    /// Returns `Ok(None)` when there is no token, or when the session changed
    /// while the request was in flight. A 401 signs the user out; any other
    /// failure is reported without touching the session.
    pub async fn refresh_profile(&self) -> Result<Option<UserProfile>, ClientError> {
        if !self.session().is_authenticated() {
            return Ok(None);
        }
        let generation = self.session().generation();

        let result: Result<UserProfile, ApiError> = self
            .client
            .request(Method::Get, PROFILE_PATH, None)
            .await
            .and_then(|response| response.data());

        match result {
            Ok(profile) => {
                if self.session().generation() != generation {
                    tracing::debug!("discarding profile for a previous session");
                    return Ok(None);
                }
                self.session().set_user(profile.clone());
                Ok(Some(profile))
            }
            Err(e) if e.is_unauthorized() => Err(self.expire_session(generation)),
            Err(e) => Err(ClientError::from_api(e, PROFILE_FAILED)),
        }
    }
}
