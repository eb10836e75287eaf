//! Authentication: credential forms and the flow controller that reconciles
//! the session store with login, signup, logout and profile responses.

mod controller;
mod forms;

pub use controller::{AuthController, AuthPhase};
pub use forms::{Credentials, Registration, SignupRequest};

/// Endpoint paths of the auth family.
pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const PROFILE_PATH: &str = "/auth/profile";
