//! # HTTP Transport
//!
//! The request layer talks to the network only through [`HttpTransport`].
//! In the browser that is [`FetchTransport`] (`gloo-net` over `fetch`);
//! tests plug in a scripted transport instead.
//!
//! A transport performs exactly one attempt. It reports an `Err` only when
//! no HTTP response exists at all; any status code, including 4xx/5xx, is
//! an `Ok(HttpResponse)` for the caller to interpret with [`decode_json`].

use std::fmt;

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::ErrorBody;

use crate::error::{ApiError, TransportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Serialize `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body)
            .map_err(|e| ApiError::decode(format!("Failed to encode request: {}", e)))?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One-shot HTTP exchange. Futures are not `Send`: in the browser they run
/// on the single-threaded event loop.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Browser `fetch` through `gloo-net`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Patch => Request::patch(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let sent = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        // An unreadable body is treated like an empty one
        let body = response.text().await.unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

/// Interpret a response: decode 2xx bodies as `T`, turn anything else into
/// an [`ApiError`] using the body's `error`/`detail`, or `fallback(status)`.
pub fn decode_json<T: DeserializeOwned>(
    response: HttpResponse,
    fallback: impl FnOnce(u16) -> String,
) -> Result<T, ApiError> {
    if response.is_success() {
        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    } else {
        let body: ErrorBody = serde_json::from_str(&response.body).unwrap_or_default();
        Err(ApiError::from_body(response.status, body, fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorKind;
    use shared::MessageResponse;

    fn fallback(status: u16) -> String {
        format!("Request failed ({})", status)
    }

    #[test]
    fn test_decode_success() {
        let response = HttpResponse {
            status: 201,
            body: r#"{"message":"User registered"}"#.to_string(),
        };
        let decoded: MessageResponse = decode_json(response, fallback).unwrap();
        assert_eq!(decoded.message, "User registered");
    }

    #[test]
    fn test_decode_error_body() {
        let response = HttpResponse {
            status: 400,
            body: r#"{"errors":{"email":["This field is required."]},"detail":"Invalid input."}"#
                .to_string(),
        };
        let err = decode_json::<MessageResponse>(response, fallback).unwrap_err();
        assert_eq!(err.message, "Invalid input.");
        assert_eq!(err.status, Some(400));
        assert_eq!(
            err.errors.unwrap()["email"],
            vec!["This field is required.".to_string()]
        );
    }

    #[test]
    fn test_decode_unparseable_error_body_uses_fallback() {
        let response = HttpResponse {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        let err = decode_json::<MessageResponse>(response, fallback).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.message, "Request failed (502)");
    }

    #[test]
    fn test_decode_mismatched_success_body() {
        let response = HttpResponse {
            status: 200,
            body: "{}".to_string(),
        };
        let err = decode_json::<MessageResponse>(response, fallback).unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Decode);
        assert!(err.status.is_none());
    }

    #[test]
    fn test_request_builder_headers() {
        let request = HttpRequest::new(HttpMethod::Post, "http://localhost/x")
            .header("Content-Type", "application/json")
            .bearer("abc")
            .json(&serde_json::json!({"amount": "100.00"}))
            .unwrap();
        assert_eq!(request.header_value("authorization"), Some("Bearer abc"));
        assert_eq!(request.header_value("content-type"), Some("application/json"));
        assert_eq!(request.body.as_deref(), Some(r#"{"amount":"100.00"}"#));
        assert_eq!(request.method.to_string(), "POST");
    }
}
