//! # API Client
//!
//! [`ApiClient`] sends one request per call through a [`Transport`], attaching the
//! current session token as a bearer credential whenever one is held. Non-2xx
//! answers become [`ApiError::Status`] with the server's `message` when it sent
//! one. Nothing is retried, cached or queued: each call reports its outcome to its
//! caller exactly once.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use store::SessionStore;

use crate::error::ApiError;
use crate::models::{Envelope, ErrorBody};
use crate::transport::{HttpRequest, Method, Transport};

/// A successful (2xx) response.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    /// Parse the body as `{"data": R}` and return the payload.
    pub fn data<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        serde_json::from_str::<Envelope<R>>(&self.body)
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

struct ClientInner<T> {
    transport: T,
    base_url: String,
}

/// Bearer-token HTTP client for the notes backend.
pub struct ApiClient<T, S> {
    inner: Arc<ClientInner<T>>,
    session: SessionStore<S>,
}

impl<T, S> Clone for ApiClient<T, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            session: self.session.clone(),
        }
    }
}

impl<T, S> ApiClient<T, S> {
    pub fn new(transport: T, base_url: impl Into<String>, session: SessionStore<S>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
            }),
            session,
        }
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }
}

impl<T: Transport, S> ApiClient<T, S> {
    /// Send a single request and classify the answer.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let bearer = self.session.token();
        tracing::debug!(%method, path, authenticated = bearer.is_some(), "api request");

        let request = HttpRequest {
            method,
            url: self.url(path),
            bearer,
            body,
        };
        let response = self.inner.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "api request got no response");
            ApiError::Network(e.to_string())
        })?;

        if response.is_success() {
            tracing::debug!(%method, path, status = response.status, "api response");
            Ok(Response {
                status: response.status,
                body: response.body,
            })
        } else {
            tracing::warn!(%method, path, status = response.status, "api request failed");
            Err(ApiError::Status {
                status: response.status,
                message: ErrorBody::message_from(&response.body),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use store::{MemoryTokenStore, SessionStore, UserProfile};

    use super::*;
    use crate::testing::StubTransport;

    fn client(
        token: Option<&str>,
    ) -> (ApiClient<StubTransport, MemoryTokenStore>, StubTransport) {
        let storage = match token {
            Some(t) => MemoryTokenStore::with_token(t),
            None => MemoryTokenStore::new(),
        };
        let transport = StubTransport::new();
        let session = SessionStore::initialize(storage);
        (
            ApiClient::new(transport.clone(), "http://api.test/api/", session),
            transport,
        )
    }

    #[tokio::test]
    async fn test_attaches_bearer_when_token_held() {
        let (client, transport) = client(Some("t0"));
        transport.respond(200, json!({"data": {"name": "A"}}));

        let response = client
            .request(Method::Get, "/auth/profile", None)
            .await
            .unwrap();
        let user: UserProfile = response.data().unwrap();
        assert_eq!(user.name, "A");

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, "http://api.test/api/auth/profile");
        assert_eq!(sent[0].bearer.as_deref(), Some("t0"));
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn test_no_bearer_without_token() {
        let (client, transport) = client(None);
        transport.respond(201, json!({"data": {}}));

        client
            .request(Method::Post, "/auth/login", Some(json!({"email": "a@b.c"})))
            .await
            .unwrap();

        let sent = transport.requests();
        assert!(sent[0].bearer.is_none());
        assert_eq!(sent[0].body, Some(json!({"email": "a@b.c"})));
    }

    #[tokio::test]
    async fn test_bearer_follows_session_changes() {
        let (client, transport) = client(None);
        transport.respond(200, json!({"data": []}));
        transport.respond(200, json!({"data": []}));

        client.request(Method::Get, "/note/notes", None).await.unwrap();
        client
            .session()
            .save(Some("fresh".to_string()), None);
        client.request(Method::Get, "/note/notes", None).await.unwrap();

        let sent = transport.requests();
        assert!(sent[0].bearer.is_none());
        assert_eq!(sent[1].bearer.as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_error_status_carries_server_message() {
        let (client, transport) = client(None);
        transport.respond(409, json!({"message": "Email already registered"}));

        let err = client
            .request(Method::Post, "/auth/signup", None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.server_message(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn test_error_without_json_body() {
        let (client, transport) = client(None);
        transport.respond_raw(502, "<html>bad gateway</html>");

        let err = client.request(Method::Get, "/note/notes", None).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 502,
                message: None
            }
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_reported_once() {
        let (client, transport) = client(None);
        transport.fail("connection refused");

        let err = client.request(Method::Get, "/note/notes", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        // No retry
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let (client, transport) = client(None);
        transport.respond_raw(200, "not json");

        let response = client.request(Method::Get, "/auth/profile", None).await.unwrap();
        let err = response.data::<UserProfile>().unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
