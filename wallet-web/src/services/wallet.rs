//! # Wallet Service
//!
//! Request layer for the `/wallet/` endpoints.
//!
//! Unlike [`crate::services::api::ApiClient`], every wallet call requires an
//! access token: without one a 401 [`ApiError`] is returned before anything
//! is sent. The token is read from the wallet layer's own storage tier.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use shared::{
    DebitWalletRequest, DebitWalletResponse, FundWalletRequest, FundWalletResponse,
    TransactionListResponse, Wallet, WalletBalanceResponse, WalletTransaction,
};

use crate::error::{ApiError, GENERIC_ERROR_MESSAGE};
use crate::services::http::{decode_json, HttpMethod, HttpRequest, HttpTransport};
use crate::services::storage::Credentials;

#[derive(Clone)]
pub struct WalletService {
    transport: Arc<dyn HttpTransport>,
    credentials: Credentials,
    wallet_base: String,
}

impl WalletService {
    /// `api_url` is the prefix the `/wallet/` routes hang off.
    pub fn new(transport: Arc<dyn HttpTransport>, credentials: Credentials, api_url: &str) -> Self {
        Self {
            transport,
            credentials,
            wallet_base: format!("{}/wallet", api_url.trim_end_matches('/')),
        }
    }

    fn url(&self, endpoint: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.wallet_base, endpoint);
        if !params.is_empty() {
            let query: Vec<String> = params
                .iter()
                .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&query.join("&"));
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, request: HttpRequest, endpoint: &str) -> Result<T, ApiError> {
        let token = self.credentials.access_token().ok_or_else(|| {
            log::warn!("wallet{}: no access token stored", endpoint);
            ApiError::missing_token()
        })?;
        let request = request
            .header("Content-Type", "application/json")
            .bearer(&token);

        log::debug!("{} wallet{}", request.method, endpoint);
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("wallet{} failed: {}", endpoint, e);
            ApiError::from(e)
        })?;

        decode_json(response, |_| GENERIC_ERROR_MESSAGE.to_string()).map_err(|e| {
            log::warn!("wallet{} returned {:?}: {}", endpoint, e.status, e.message);
            e
        })
    }

    /// `GET /wallet/` - wallet record including the balance
    pub async fn get_wallet(&self) -> Result<Wallet, ApiError> {
        let request = HttpRequest::new(HttpMethod::Get, self.url("/", &[]));
        self.fetch(request, "/").await
    }

    /// `GET /wallet/balance/` - balance only, for quick refreshes
    pub async fn get_balance(&self) -> Result<WalletBalanceResponse, ApiError> {
        let request = HttpRequest::new(HttpMethod::Get, self.url("/balance/", &[]));
        self.fetch(request, "/balance/").await
    }

    /// `GET /wallet/transactions/?limit=` - history, newest first; `None` fetches all
    pub async fn get_transactions(&self, limit: Option<u32>) -> Result<TransactionListResponse, ApiError> {
        let params: Vec<(&str, String)> = limit.map(|l| ("limit", l.to_string())).into_iter().collect();
        let request = HttpRequest::new(HttpMethod::Get, self.url("/transactions/", &params));
        self.fetch(request, "/transactions/").await
    }

    /// `GET /wallet/transactions/:reference/`
    pub async fn get_transaction_by_reference(&self, reference: &str) -> Result<WalletTransaction, ApiError> {
        let endpoint = format!("/transactions/{}/", urlencoding::encode(reference));
        let request = HttpRequest::new(HttpMethod::Get, self.url(&endpoint, &[]));
        self.fetch(request, &endpoint).await
    }

    /// `POST /wallet/fund/` - returns a pending reference; payment completes
    /// at the gateway.
    pub async fn initiate_funding(&self, request: &FundWalletRequest) -> Result<FundWalletResponse, ApiError> {
        let http = HttpRequest::new(HttpMethod::Post, self.url("/fund/", &[])).json(request)?;
        self.fetch(http, "/fund/").await
    }

    /// `POST /wallet/debit/` - internal, for checkout flows
    pub async fn debit_wallet(&self, request: &DebitWalletRequest) -> Result<DebitWalletResponse, ApiError> {
        let http = HttpRequest::new(HttpMethod::Post, self.url("/debit/", &[])).json(request)?;
        self.fetch(http, "/debit/").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiErrorKind, MISSING_TOKEN_MESSAGE};
    use crate::services::testing::*;
    use shared::{AuthTokens, PaymentMethod, TokenUser, TransactionStatus};

    fn signed_in_service(transport: Arc<MockTransport>) -> WalletService {
        let credentials = memory_credentials();
        credentials.save(&AuthTokens {
            access_token: "access-1".to_string(),
            refresh_token: "refresh-1".to_string(),
            user: TokenUser {
                email: "ada@example.com".to_string(),
            },
        });
        WalletService::new(transport, credentials, WALLET_BASE)
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_network() {
        let transport = MockTransport::new();
        let service = WalletService::new(transport.clone(), memory_credentials(), WALLET_BASE);

        let err = service.get_wallet().await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::Unauthenticated);
        assert_eq!(err.status, Some(401));
        assert_eq!(err.message, MISSING_TOKEN_MESSAGE);
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_get_wallet_sends_bearer() {
        let transport = MockTransport::new();
        transport.respond(HttpMethod::Get, "/api/wallet/", 200, WALLET_JSON);
        let service = signed_in_service(transport.clone());

        let wallet = service.get_wallet().await.unwrap();
        assert_eq!(wallet.balance, "15000.50");

        let request = &transport.requests()[0];
        assert_eq!(request.url, "http://api.test/api/wallet/");
        assert_eq!(request.header_value("Authorization"), Some("Bearer access-1"));
    }

    #[tokio::test]
    async fn test_transactions_limit_and_reference_encoding() {
        let transport = MockTransport::new();
        transport.respond(HttpMethod::Get, "/wallet/transactions/", 200, &transaction_list_json(&[]));
        let tx = transaction_json("TXN/1 2", "DEBIT", "COMPLETED", "250.00", "2024-05-02T10:15:00Z");
        transport.respond(HttpMethod::Get, "/wallet/transactions/TXN%2F1%202/", 200, &tx);
        let service = signed_in_service(transport.clone());

        let list = service.get_transactions(Some(5)).await.unwrap();
        assert_eq!(list.count, 0);
        service.get_transactions(None).await.unwrap();
        let fetched = service.get_transaction_by_reference("TXN/1 2").await.unwrap();
        assert_eq!(fetched.reference, "TXN/1 2");

        let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(urls[0], "http://api.test/api/wallet/transactions/?limit=5");
        assert_eq!(urls[1], "http://api.test/api/wallet/transactions/");
        assert_eq!(urls[2], "http://api.test/api/wallet/transactions/TXN%2F1%202/");
    }

    #[tokio::test]
    async fn test_funding_request_and_error_shape() {
        let transport = MockTransport::new();
        transport.respond_once(
            HttpMethod::Post,
            "/wallet/fund/",
            200,
            r#"{"message":"Funding initiated","transaction_reference":"FUND-1","amount":"5000.00",
                "payment_method":"paystack","status":"PENDING","next_step":"Complete payment"}"#,
        );
        transport.respond(
            HttpMethod::Post,
            "/wallet/fund/",
            400,
            r#"{"errors":{"amount":["Minimum funding amount is ₦100.00"]}}"#,
        );
        let service = signed_in_service(transport.clone());
        let request = FundWalletRequest {
            amount: "5000.00".to_string(),
            payment_method: PaymentMethod::Paystack,
        };

        let response = service.initiate_funding(&request).await.unwrap();
        assert_eq!(response.status, TransactionStatus::Pending);
        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"amount":"5000.00","payment_method":"paystack"}"#)
        );

        let err = service.initiate_funding(&request).await.unwrap_err();
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
        assert_eq!(err.status, Some(400));
        assert!(err.errors.unwrap().contains_key("amount"));
    }

    #[tokio::test]
    async fn test_funding_serializer_errors_reach_caller() {
        let transport = MockTransport::new();
        transport.respond(
            HttpMethod::Post,
            "/wallet/fund/",
            400,
            r#"{"error":{"amount":["Ensure that there are no more than 12 digits in total."]}}"#,
        );
        let service = signed_in_service(transport);
        let request = FundWalletRequest {
            amount: "1000000000000.00".to_string(),
            payment_method: PaymentMethod::Paystack,
        };

        let err = service.initiate_funding(&request).await.unwrap_err();

        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.status, Some(400));
        assert_eq!(err.message, "Ensure that there are no more than 12 digits in total.");
        assert_eq!(err.display_message(), err.message);
        assert_eq!(
            err.errors.unwrap()["amount"],
            vec!["Ensure that there are no more than 12 digits in total.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_debit_wallet() {
        let transport = MockTransport::new();
        let tx = transaction_json("TXN-9", "DEBIT", "COMPLETED", "250.00", "2024-05-02T10:15:00Z");
        transport.respond(
            HttpMethod::Post,
            "/wallet/debit/",
            200,
            &format!(r#"{{"message":"Wallet debited","transaction":{}}}"#, tx),
        );
        let service = signed_in_service(transport.clone());

        let response = service
            .debit_wallet(&DebitWalletRequest {
                amount: "250.00".to_string(),
                description: Some("Order #12".to_string()),
                metadata: None,
            })
            .await
            .unwrap();
        assert_eq!(response.transaction.reference, "TXN-9");
        assert_eq!(
            transport.requests()[0].body.as_deref(),
            Some(r#"{"amount":"250.00","description":"Order #12"}"#)
        );
    }
}
