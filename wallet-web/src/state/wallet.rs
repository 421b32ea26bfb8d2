//! Wallet state management
//!
//! A reducer over [`WalletState`] plus the async operations that feed it.
//! Every operation follows the same shape: set loading, call the wallet
//! service, then dispatch the matching `Set*` action or `SetError`.

use std::sync::Arc;

use futures_util::future::join;
use leptos::prelude::*;
use shared::{FundWalletRequest, FundWalletResponse, Wallet, WalletTransaction};

use crate::config::use_config;
use crate::error::ApiError;
use crate::services::http::FetchTransport;
use crate::services::storage::Credentials;
use crate::services::wallet::WalletService;
use crate::state::{Lifetime, StateCell};

#[derive(Debug, Clone, PartialEq)]
pub struct WalletState {
    pub wallet: Option<Wallet>,
    /// Decimal string, mirrors `wallet.balance` once a wallet is loaded
    pub balance: String,
    pub transactions: Vec<WalletTransaction>,
    pub transaction_count: u64,
    pub current_transaction: Option<WalletTransaction>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for WalletState {
    fn default() -> Self {
        Self {
            wallet: None,
            balance: "0.00".to_string(),
            transactions: Vec::new(),
            transaction_count: 0,
            current_transaction: None,
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WalletAction {
    SetLoading(bool),
    SetError(Option<String>),
    SetWallet(Wallet),
    SetBalance(String),
    SetTransactions {
        transactions: Vec<WalletTransaction>,
        count: u64,
    },
    SetCurrentTransaction(Option<WalletTransaction>),
    ClearError,
}

impl WalletState {
    pub fn reduce(&mut self, action: WalletAction) {
        match action {
            WalletAction::SetLoading(loading) => {
                self.is_loading = loading;
            }
            WalletAction::SetError(error) => {
                self.error = error;
                self.is_loading = false;
            }
            WalletAction::SetWallet(wallet) => {
                self.balance = wallet.balance.clone();
                self.wallet = Some(wallet);
                self.is_loading = false;
                self.error = None;
            }
            WalletAction::SetBalance(balance) => {
                if let Some(wallet) = self.wallet.as_mut() {
                    wallet.balance = balance.clone();
                }
                self.balance = balance;
                self.is_loading = false;
                self.error = None;
            }
            WalletAction::SetTransactions { transactions, count } => {
                self.transactions = transactions;
                self.transaction_count = count;
                self.is_loading = false;
                self.error = None;
            }
            WalletAction::SetCurrentTransaction(transaction) => {
                self.current_transaction = transaction;
                self.is_loading = false;
                self.error = None;
            }
            WalletAction::ClearError => {
                self.error = None;
            }
        }
    }
}

/// Wallet container: state cell + wallet service.
#[derive(Clone)]
pub struct WalletStore<C> {
    state: C,
    service: WalletService,
    lifetime: Lifetime,
}

/// The container as provided to views.
pub type WalletContext = WalletStore<RwSignal<WalletState>>;

impl<C: StateCell<WalletState>> WalletStore<C> {
    pub fn new(state: C, service: WalletService) -> Self {
        Self {
            state,
            service,
            lifetime: Lifetime::default(),
        }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn dispatch(&self, action: WalletAction) {
        if !self.lifetime.is_alive() {
            log::debug!("wallet container detached, dropping {:?}", action);
            return;
        }
        self.state.update(|state| state.reduce(action));
    }

    fn fail(&self, err: &ApiError) {
        self.dispatch(WalletAction::SetError(Some(err.display_message())));
    }

    /// Full wallet record. Call on dashboard mount or after a balance change.
    pub async fn fetch_wallet(&self) {
        self.dispatch(WalletAction::SetLoading(true));
        match self.service.get_wallet().await {
            Ok(wallet) => self.dispatch(WalletAction::SetWallet(wallet)),
            Err(e) => self.fail(&e),
        }
    }

    pub async fn fetch_balance(&self) {
        self.dispatch(WalletAction::SetLoading(true));
        match self.service.get_balance().await {
            Ok(response) => self.dispatch(WalletAction::SetBalance(response.balance)),
            Err(e) => self.fail(&e),
        }
    }

    pub async fn fetch_transactions(&self, limit: Option<u32>) {
        self.dispatch(WalletAction::SetLoading(true));
        match self.service.get_transactions(limit).await {
            Ok(response) => self.dispatch(WalletAction::SetTransactions {
                transactions: response.transactions,
                count: response.count,
            }),
            Err(e) => self.fail(&e),
        }
    }

    pub async fn fetch_transaction_by_reference(&self, reference: &str) {
        self.dispatch(WalletAction::SetLoading(true));
        match self.service.get_transaction_by_reference(reference).await {
            Ok(transaction) => self.dispatch(WalletAction::SetCurrentTransaction(Some(transaction))),
            Err(e) => self.fail(&e),
        }
    }

    /// Start a funding request. On success the transaction list is reloaded
    /// so the pending entry shows up. On failure the error is stored and
    /// also handed back so the caller can notify the user.
    pub async fn initiate_funding(&self, request: FundWalletRequest) -> Result<FundWalletResponse, ApiError> {
        self.dispatch(WalletAction::SetLoading(true));
        match self.service.initiate_funding(&request).await {
            Ok(response) => {
                log::info!("Funding initiated: {}", response.transaction_reference);
                self.fetch_transactions(None).await;
                Ok(response)
            }
            Err(e) => {
                self.fail(&e);
                Err(e)
            }
        }
    }

    /// Reload wallet and transactions concurrently; resolves when both are done.
    pub async fn refresh_wallet(&self) {
        join(self.fetch_wallet(), self.fetch_transactions(None)).await;
    }

    pub fn clear_error(&self) {
        self.dispatch(WalletAction::ClearError);
    }

    /// Stop writing state; in-flight operations finish silently.
    pub fn detach(&self) {
        self.lifetime.detach();
    }
}

/// Build the wallet container for the current subtree and detach it when
/// the subtree is torn down.
pub fn provide_wallet_context() -> WalletContext {
    let config = use_config();
    let service = WalletService::new(
        Arc::new(FetchTransport),
        Credentials::browser(config.wallet_token_tier),
        &config.wallet_api_url,
    );
    let context = WalletStore::new(RwSignal::new(WalletState::default()), service);
    provide_context(context.clone());

    let owned = context.clone();
    on_cleanup(move || owned.detach());

    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::error::{GENERIC_ERROR_MESSAGE, MISSING_TOKEN_MESSAGE};
    use crate::services::http::HttpMethod;
    use crate::services::testing::*;
    use shared::{AuthTokens, PaymentMethod, TokenUser};

    type TestStore = WalletStore<Arc<Mutex<WalletState>>>;

    fn wallet_fixture() -> Wallet {
        serde_json::from_str(WALLET_JSON).unwrap()
    }

    fn store(transport: Arc<MockTransport>, signed_in: bool) -> (TestStore, Arc<Mutex<WalletState>>) {
        let credentials = memory_credentials();
        if signed_in {
            credentials.save(&AuthTokens {
                access_token: "access-1".to_string(),
                refresh_token: "refresh-1".to_string(),
                user: TokenUser {
                    email: "ada@example.com".to_string(),
                },
            });
        }
        let cell = Arc::new(Mutex::new(WalletState::default()));
        let service = WalletService::new(transport, credentials, WALLET_BASE);
        (WalletStore::new(cell.clone(), service), cell)
    }

    fn snapshot(cell: &Arc<Mutex<WalletState>>) -> WalletState {
        cell.lock().unwrap().clone()
    }

    #[test]
    fn test_initial_state() {
        let state = WalletState::default();
        assert_eq!(state.balance, "0.00");
        assert!(state.wallet.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_reducer_transitions() {
        let mut state = WalletState::default();

        state.reduce(WalletAction::SetLoading(true));
        assert!(state.is_loading);

        state.reduce(WalletAction::SetError(Some("boom".to_string())));
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_loading);

        state.reduce(WalletAction::SetLoading(true));
        state.reduce(WalletAction::SetWallet(wallet_fixture()));
        assert_eq!(state.balance, "15000.50");
        assert!(state.error.is_none());
        assert!(!state.is_loading);

        state.reduce(WalletAction::SetBalance("20000.00".to_string()));
        assert_eq!(state.balance, "20000.00");
        assert_eq!(state.wallet.as_ref().unwrap().balance, "20000.00");

        state.reduce(WalletAction::SetError(Some("again".to_string())));
        state.reduce(WalletAction::ClearError);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_set_balance_without_wallet() {
        let mut state = WalletState::default();
        state.reduce(WalletAction::SetBalance("42.00".to_string()));
        assert_eq!(state.balance, "42.00");
        assert!(state.wallet.is_none());
    }

    #[test]
    fn test_transactions_replaced_wholesale() {
        let tx = |r: &str| -> WalletTransaction {
            serde_json::from_str(&transaction_json(r, "CREDIT", "COMPLETED", "10.00", "2024-05-02T10:15:00Z"))
                .unwrap()
        };
        let mut state = WalletState::default();
        state.reduce(WalletAction::SetTransactions {
            transactions: vec![tx("A"), tx("B")],
            count: 2,
        });
        state.reduce(WalletAction::SetTransactions {
            transactions: vec![tx("C")],
            count: 1,
        });
        assert_eq!(state.transaction_count, 1);
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.transactions[0].reference, "C");
    }

    #[tokio::test]
    async fn test_fetch_wallet_success() {
        let transport = MockTransport::new();
        transport.respond(HttpMethod::Get, "/api/wallet/", 200, WALLET_JSON);
        let (store, cell) = store(transport, true);

        store.fetch_wallet().await;
        let state = snapshot(&cell);
        assert_eq!(state.balance, "15000.50");
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_fetch_without_token_sets_unauthenticated_error() {
        let (store, cell) = store(MockTransport::new(), false);
        store.fetch_balance().await;
        assert_eq!(snapshot(&cell).error.as_deref(), Some(MISSING_TOKEN_MESSAGE));
    }

    #[tokio::test]
    async fn test_network_failure_normalized() {
        let transport = MockTransport::new();
        transport.fail(HttpMethod::Get, "/wallet/transactions/", "Failed to fetch");
        let (store, cell) = store(transport, true);

        store.fetch_transactions(Some(10)).await;
        let state = snapshot(&cell);
        assert_eq!(state.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_fetch_transaction_by_reference() {
        let transport = MockTransport::new();
        let tx = transaction_json("TXN-7", "CREDIT", "COMPLETED", "10.00", "2024-05-02T10:15:00Z");
        transport.respond(HttpMethod::Get, "/wallet/transactions/TXN-7/", 200, &tx);
        let (store, cell) = store(transport, true);

        store.fetch_transaction_by_reference("TXN-7").await;
        assert_eq!(snapshot(&cell).current_transaction.unwrap().reference, "TXN-7");
    }

    #[tokio::test]
    async fn test_initiate_funding_success_reloads_transactions() {
        let transport = MockTransport::new();
        transport.respond(
            HttpMethod::Post,
            "/wallet/fund/",
            200,
            r#"{"message":"Funding initiated","transaction_reference":"FUND-1","amount":"5000.00",
                "payment_method":"paystack","status":"PENDING","next_step":"Complete payment"}"#,
        );
        let pending = transaction_json("FUND-1", "CREDIT", "PENDING", "5000.00", "2024-05-02T10:15:00Z");
        transport.respond(HttpMethod::Get, "/wallet/transactions/", 200, &transaction_list_json(&[pending]));
        let (store, cell) = store(transport.clone(), true);

        let response = store
            .initiate_funding(FundWalletRequest {
                amount: "5000.00".to_string(),
                payment_method: PaymentMethod::Paystack,
            })
            .await
            .unwrap();
        assert_eq!(response.transaction_reference, "FUND-1");

        let state = snapshot(&cell);
        assert_eq!(state.transactions[0].reference, "FUND-1");
        assert!(!state.is_loading);
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_initiate_funding_failure_propagates_unmodified() {
        let transport = MockTransport::new();
        transport.respond(
            HttpMethod::Post,
            "/wallet/fund/",
            400,
            r#"{"error":"Payment gateway unavailable"}"#,
        );
        let (store, cell) = store(transport.clone(), true);
        let request = FundWalletRequest {
            amount: "5000.00".to_string(),
            payment_method: PaymentMethod::Flutterwave,
        };

        let direct = store.service.initiate_funding(&request).await.unwrap_err();
        let err = store.initiate_funding(request).await.unwrap_err();

        assert_eq!(err, direct);
        assert_eq!(err.message, "Payment gateway unavailable");
        assert_eq!(snapshot(&cell).error.as_deref(), Some("Payment gateway unavailable"));
        // No transaction reload after a failed funding call
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_refresh_wallet_waits_for_both_fetches() {
        let transport = MockTransport::new();
        // Wallet detail settles last
        transport.respond_delayed(HttpMethod::Get, "/api/wallet/", 200, WALLET_JSON, 5);
        let tx = transaction_json("TXN-1", "DEBIT", "COMPLETED", "99.99", "2024-05-02T10:15:00Z");
        transport.respond(HttpMethod::Get, "/wallet/transactions/", 200, &transaction_list_json(&[tx]));
        let (store, cell) = store(transport.clone(), true);

        store.refresh_wallet().await;

        let state = snapshot(&cell);
        assert_eq!(state.balance, "15000.50");
        assert_eq!(state.transaction_count, 1);
        assert!(!state.is_loading);
        let completed = transport.completed();
        assert_eq!(completed.len(), 2);
        assert!(completed[0].ends_with("/wallet/transactions/"));
        assert!(completed[1].ends_with("/api/wallet/"));
    }

    #[tokio::test]
    async fn test_refresh_wallet_transactions_settle_last() {
        let transport = MockTransport::new();
        transport.respond(HttpMethod::Get, "/api/wallet/", 200, WALLET_JSON);
        transport.respond_delayed(HttpMethod::Get, "/wallet/transactions/", 200, &transaction_list_json(&[]), 5);
        let (store, cell) = store(transport.clone(), true);

        store.refresh_wallet().await;

        let state = snapshot(&cell);
        assert!(state.wallet.is_some());
        assert_eq!(state.transaction_count, 0);
        assert!(transport.completed()[1].ends_with("/wallet/transactions/"));
    }

    #[tokio::test]
    async fn test_detached_store_ignores_late_results() {
        let transport = MockTransport::new();
        transport.respond(HttpMethod::Get, "/api/wallet/", 200, WALLET_JSON);
        let (store, cell) = store(transport.clone(), true);

        store.detach();
        store.fetch_wallet().await;

        assert_eq!(transport.request_count(), 1);
        assert_eq!(snapshot(&cell), WalletState::default());
    }
}
