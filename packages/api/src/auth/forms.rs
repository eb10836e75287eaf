//! Credential forms submitted by the login and signup views.

use serde::Serialize;

use crate::error::ClientError;

/// Login form, sent as-is to the login endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }
}

/// Signup form as filled in by the user, including the confirmation field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Registration {
    pub name: String,
    pub email: String,
    /// Optional; blank means "not given".
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Body of the signup request. The confirmation field never leaves the client.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

impl Registration {
    /// Check the form locally and build the request body.
    pub fn validate(&self) -> Result<SignupRequest, ClientError> {
        if self.password != self.confirm_password {
            return Err(ClientError::validation("Passwords do not match"));
        }
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ClientError::validation("Name is required"));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ClientError::validation("Email is required"));
        }
        let phone = self.phone.trim();

        Ok(SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            password: self.password.clone(),
        })
    }

    /// True while the confirmation is filled in but differs from the password.
    pub fn passwords_differ(&self) -> bool {
        !self.confirm_password.is_empty() && self.password != self.confirm_password
    }
}
