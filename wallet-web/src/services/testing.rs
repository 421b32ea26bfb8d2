//! Scripted transport and fixtures for request-layer tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::services::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::services::storage::{Credentials, MemoryStorage};

pub const API_BASE: &str = "http://api.test";
pub const WALLET_BASE: &str = "http://api.test/api";

#[derive(Debug, Clone)]
enum Reply {
    Respond { status: u16, body: String },
    NetworkFailure(String),
}

#[derive(Debug, Clone)]
struct Route {
    method: HttpMethod,
    path: String,
    reply: Reply,
    yields: usize,
    once: bool,
}

/// Answers requests from a list of routes matched on method and URL path
/// suffix (query string ignored). First match wins; `once` routes are
/// consumed. Unmatched requests get a 404.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
    completed: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }

    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.push(Route {
            method,
            path: path.to_string(),
            reply: Reply::Respond {
                status,
                body: body.to_string(),
            },
            yields: 0,
            once: false,
        });
    }

    pub fn respond_once(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.push(Route {
            method,
            path: path.to_string(),
            reply: Reply::Respond {
                status,
                body: body.to_string(),
            },
            yields: 0,
            once: true,
        });
    }

    /// Like [`respond`](Self::respond) but yields to the executor `yields`
    /// times first, so other in-flight requests can finish earlier.
    pub fn respond_delayed(&self, method: HttpMethod, path: &str, status: u16, body: &str, yields: usize) {
        self.push(Route {
            method,
            path: path.to_string(),
            reply: Reply::Respond {
                status,
                body: body.to_string(),
            },
            yields,
            once: false,
        });
    }

    pub fn fail(&self, method: HttpMethod, path: &str, message: &str) {
        self.push(Route {
            method,
            path: path.to_string(),
            reply: Reply::NetworkFailure(message.to_string()),
            yields: 0,
            once: false,
        });
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// URL paths in the order their responses were delivered.
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }

    fn take_route(&self, method: HttpMethod, path: &str) -> Option<Route> {
        let mut routes = self.routes.lock().unwrap();
        let index = routes
            .iter()
            .position(|r| r.method == method && path.ends_with(&r.path))?;
        if routes[index].once {
            Some(routes.remove(index))
        } else {
            Some(routes[index].clone())
        }
    }
}

fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let path = strip_query(&request.url).to_string();
        let method = request.method;
        self.requests.lock().unwrap().push(request);

        let route = self.take_route(method, &path);
        if let Some(route) = &route {
            for _ in 0..route.yields {
                tokio::task::yield_now().await;
            }
        }
        self.completed.lock().unwrap().push(path);

        match route.map(|r| r.reply) {
            Some(Reply::Respond { status, body }) => Ok(HttpResponse { status, body }),
            Some(Reply::NetworkFailure(message)) => Err(TransportError::Network(message)),
            None => Ok(HttpResponse {
                status: 404,
                body: r#"{"detail":"Not found."}"#.to_string(),
            }),
        }
    }
}

pub fn memory_credentials() -> Credentials {
    Credentials::new(Arc::new(MemoryStorage::new()))
}

pub const PROFILE_JSON: &str = r#"{
    "id": 7,
    "email": "ada@example.com",
    "username": "ada",
    "is_active": true,
    "is_verified": true,
    "email_verified": true,
    "phone_verified": false,
    "date_joined": "2024-03-01T09:30:00Z"
}"#;

pub const TOKENS_JSON: &str =
    r#"{"access_token":"access-1","refresh_token":"refresh-1","user":{"email":"ada@example.com"}}"#;

pub const WALLET_JSON: &str = r#"{
    "user": 7,
    "email": "ada@example.com",
    "username": "ada",
    "balance": "15000.50",
    "created_at": "2024-03-01T09:30:00Z",
    "updated_at": "2024-05-02T10:15:00Z"
}"#;

pub fn transaction_json(reference: &str, kind: &str, status: &str, amount: &str, created_at: &str) -> String {
    format!(
        r#"{{
            "id": 1,
            "wallet": 3,
            "user_email": "ada@example.com",
            "transaction_type": "{kind}",
            "amount": "{amount}",
            "balance_before": "0.00",
            "balance_after": "{amount}",
            "status": "{status}",
            "source": "FUNDING",
            "reference": "{reference}",
            "description": "Wallet funding of ₦{amount}",
            "metadata": {{}},
            "created_at": "{created_at}",
            "updated_at": "{created_at}"
        }}"#
    )
}

pub fn transaction_list_json(transactions: &[String]) -> String {
    format!(
        r#"{{"count":{},"transactions":[{}]}}"#,
        transactions.len(),
        transactions.join(",")
    )
}
