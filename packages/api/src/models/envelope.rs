//! # Response envelopes
//!
//! Every successful backend response wraps its payload as `{"data": ...}`; every
//! error response carries `{"message": "..."}`. These types pin those shapes down
//! so responses are validated once, at the API boundary.
//!
//! | Type | Shape |
//! |------|-------|
//! | [`Envelope<T>`] | `{ "data": T }` |
//! | [`ErrorBody`] | `{ "message": string? }` |
//! | [`AuthData`] | `{ "token": string?, "user": UserProfile? }`, the `data` of login and signup |

use serde::{Deserialize, Serialize};
use store::UserProfile;

/// Success wrapper around a response payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body of a non-2xx response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Extract a non-blank message from a raw error body.
    ///
    /// Bodies that are not JSON (proxies, HTML error pages) yield `None`.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Payload of a successful login or signup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            ErrorBody::message_from(r#"{"message":"Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert!(ErrorBody::message_from(r#"{"error":"x"}"#).is_none());
        assert!(ErrorBody::message_from(r#"{"message":"  "}"#).is_none());
        assert!(ErrorBody::message_from("<html>Bad Gateway</html>").is_none());
        assert!(ErrorBody::message_from("").is_none());
    }

    #[test]
    fn test_auth_data_tolerates_missing_fields() {
        let env: Envelope<AuthData> = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(env.data.token.is_none());
        assert!(env.data.user.is_none());

        let env: Envelope<AuthData> =
            serde_json::from_str(r#"{"data":{"token":"t1","user":{"name":"A"}}}"#).unwrap();
        assert_eq!(env.data.token.as_deref(), Some("t1"));
        assert_eq!(env.data.user.unwrap().name, "A");
    }
}
