//! Error types for the API boundary and the user-facing error taxonomy.

use thiserror::Error;

/// Failure of a single API call, as seen at the HTTP boundary.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        /// The `message` field of the error body, when there was one.
        message: Option<String>,
    },
    /// No response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// What the user gets told when an operation fails.
///
/// The `Display` text is the notice shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Rejected before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// A 401 from an authenticated endpoint; the session has been cleared.
    #[error("Session expired. Please log in again.")]
    SessionExpired,
    /// A 401 for a session that has since been replaced; the current one is kept.
    #[error("This request belonged to a previous session.")]
    Superseded,
    /// Any other non-2xx answer, or a response that could not be understood.
    #[error("{0}")]
    Request(String),
    /// The backend could not be reached.
    #[error("{0}")]
    Network(String),
}

impl ClientError {
    pub fn validation(message: &str) -> Self {
        ClientError::Validation(message.to_string())
    }

    /// Map an API failure to a notice, preferring the server's own message
    /// and falling back to `default`.
    pub fn from_api(err: ApiError, default: &str) -> Self {
        match err {
            ApiError::Status { message, .. } => {
                ClientError::Request(message.unwrap_or_else(|| default.to_string()))
            }
            ApiError::Network(_) => ClientError::Network(default.to_string()),
            ApiError::Decode(_) => ClientError::Request(default.to_string()),
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired)
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, ClientError::Superseded)
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::Status {
            status: 400,
            message: Some("Title too long".to_string()),
        };
        assert_eq!(
            ClientError::from_api(err, "Unable to save note").to_string(),
            "Title too long"
        );
    }

    #[test]
    fn test_default_message_when_server_is_silent() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(
            ClientError::from_api(err, "Unable to save note"),
            ClientError::Request("Unable to save note".to_string())
        );
        assert_eq!(
            ClientError::from_api(ApiError::Network("refused".to_string()), "Failed to load notes"),
            ClientError::Network("Failed to load notes".to_string())
        );
        assert_eq!(
            ClientError::from_api(ApiError::Decode("eof".to_string()), "Failed"),
            ClientError::Request("Failed".to_string())
        );
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Status {
            status: 401,
            message: None,
        };
        assert!(err.is_unauthorized());
        assert!(!ApiError::Network("x".to_string()).is_unauthorized());
        assert_eq!(
            ClientError::SessionExpired.to_string(),
            "Session expired. Please log in again."
        );
    }
}
