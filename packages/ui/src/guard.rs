//! Route Guard: decides whether a protected view may render.
//!
//! The decision is local and synchronous. It trusts the presence of a persisted
//! token and never asks the backend; an invalid token is caught later by the
//! first authenticated call, which signs the user out.

/// Path of the login view.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Send the visitor to `to`, remembering where they were headed.
    Redirect { to: &'static str, from: String },
}

/// Gate a navigation to `requested` on the session being authenticated.
pub fn check_access(authenticated: bool, requested: &str) -> Access {
    if authenticated {
        Access::Granted
    } else {
        Access::Redirect {
            to: LOGIN_PATH,
            from: requested.to_string(),
        }
    }
}
