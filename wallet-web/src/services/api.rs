//! # Auth API Client
//!
//! Registration, login and profile endpoints under `/api/auth/`.
//!
//! Requests carry `Authorization: Bearer <token>` whenever the auth token
//! tier holds an access token; a missing token is not an error here, the
//! server decides. `login` persists the returned token pair, `logout` only
//! clears it (the API has no logout endpoint).

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{AuthTokens, LoginRequest, MessageResponse, RegisterRequest, UserProfile};

use crate::error::ApiError;
use crate::services::http::{decode_json, HttpMethod, HttpRequest, HttpTransport};
use crate::services::storage::Credentials;

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
    base_url: String,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            credentials,
            base_url: base_url.into(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn request<T: DeserializeOwned>(&self, request: HttpRequest, endpoint: &str) -> Result<T, ApiError> {
        let mut request = request.header("Content-Type", "application/json");
        if let Some(token) = self.credentials.access_token() {
            request = request.bearer(&token);
        }

        log::debug!("{} {}", request.method, endpoint);
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} failed: {}", endpoint, e);
            ApiError::from(e)
        })?;

        decode_json(response, |status| format!("Request failed ({})", status)).map_err(|e| {
            log::warn!("{} returned {:?}: {}", endpoint, e.status, e.message);
            e
        })
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let request = HttpRequest::new(HttpMethod::Get, format!("{}{}", self.base_url, endpoint));
        self.request(request, endpoint).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> Result<T, ApiError> {
        let request =
            HttpRequest::new(HttpMethod::Post, format!("{}{}", self.base_url, endpoint)).json(body)?;
        self.request(request, endpoint).await
    }

    /// Create an account. No tokens are issued; call [`login`](Self::login) next.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        self.post("/api/auth/register/", payload).await
    }

    /// Log in and persist the returned tokens so later requests are authenticated.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthTokens, ApiError> {
        let tokens: AuthTokens = self.post("/api/auth/login/", payload).await?;
        self.credentials.save(&tokens);
        log::info!("Signed in as {}", tokens.user.email);
        Ok(tokens)
    }

    pub async fn get_profile(&self) -> Result<UserProfile, ApiError> {
        self.get("/api/auth/profile/").await
    }

    pub fn logout(&self) {
        self.credentials.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;
    use crate::services::testing::*;

    fn client(transport: Arc<MockTransport>) -> ApiClient {
        ApiClient::new(transport, memory_credentials(), API_BASE)
    }

    #[tokio::test]
    async fn test_login_stores_tokens_and_authenticates_later_requests() {
        let transport = MockTransport::new();
        transport.respond(HttpMethod::Post, "/api/auth/login/", 200, TOKENS_JSON);
        transport.respond(HttpMethod::Get, "/api/auth/profile/", 200, PROFILE_JSON);
        let api = client(transport.clone());

        let tokens = api
            .login(&LoginRequest {
                email: "ada@example.com".to_string(),
                password: "correct-horse".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(tokens.access_token, "access-1");
        assert_eq!(api.credentials().access_token().as_deref(), Some("access-1"));

        let profile = api.get_profile().await.unwrap();
        assert_eq!(profile.username, "ada");

        let requests = transport.requests();
        assert_eq!(requests[0].url, "http://api.test/api/auth/login/");
        assert!(requests[0].header_value("Authorization").is_none());
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"email":"ada@example.com","password":"correct-horse"}"#)
        );
        assert_eq!(requests[1].header_value("Authorization"), Some("Bearer access-1"));
        assert_eq!(requests[1].header_value("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_error_message_from_body_or_status() {
        let transport = MockTransport::new();
        transport.respond_once(
            HttpMethod::Post,
            "/api/auth/register/",
            400,
            r#"{"error":"A user with this email already exists."}"#,
        );
        transport.respond(HttpMethod::Post, "/api/auth/register/", 500, "");
        let api = client(transport);
        let payload = RegisterRequest {
            email: "ada@example.com".to_string(),
            password: "correct-horse".to_string(),
            username: "ada".to_string(),
        };

        let err = api.register(&payload).await.unwrap_err();
        assert_eq!(err.message, "A user with this email already exists.");
        assert_eq!(err.status, Some(400));

        let err = api.register(&payload).await.unwrap_err();
        assert_eq!(err.message, "Request failed (500)");
    }

    #[tokio::test]
    async fn test_failed_login_keeps_no_tokens() {
        let transport = MockTransport::new();
        transport.respond(
            HttpMethod::Post,
            "/api/auth/login/",
            401,
            r#"{"detail":"Invalid credentials"}"#,
        );
        let api = client(transport);

        let err = api
            .login(&LoginRequest {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.message, "Invalid credentials");
        assert!(err.is_unauthorized());
        assert!(!api.credentials().has_access_token());
    }

    #[tokio::test]
    async fn test_network_failure_is_tagged() {
        let transport = MockTransport::new();
        transport.fail(HttpMethod::Get, "/api/auth/profile/", "Failed to fetch");
        let api = client(transport);

        let err = api.get_profile().await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Network);
        assert_eq!(err.message, "Network error: Failed to fetch");
    }
}
