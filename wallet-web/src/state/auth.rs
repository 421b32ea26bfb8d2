//! Authentication state
//!
//! Holds the signed-in user's profile. The token pair itself lives in the
//! auth layer's storage tier; this container only mirrors whether a valid
//! profile could be loaded with it.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::{LoginRequest, RegisterRequest, UserProfile};

use crate::config::use_config;
use crate::error::ApiError;
use crate::services::api::ApiClient;
use crate::services::http::FetchTransport;
use crate::services::storage::Credentials;
use crate::state::StateCell;

#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    /// True until the startup token check finishes
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

#[derive(Clone)]
pub struct AuthStore<C> {
    state: C,
    api: ApiClient,
}

pub type AuthContext = AuthStore<RwSignal<AuthState>>;

impl<C: StateCell<AuthState>> AuthStore<C> {
    pub fn new(state: C, api: ApiClient) -> Self {
        Self { state, api }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read_with(AuthState::is_authenticated).unwrap_or(false)
    }

    /// Startup check: a stored access token is only trusted once the
    /// profile endpoint accepts it. A rejected token is cleared.
    pub async fn check_auth(&self) {
        if self.api.credentials().has_access_token() {
            match self.api.get_profile().await {
                Ok(profile) => {
                    self.state.update(|state| state.user = Some(profile));
                }
                Err(e) => {
                    log::error!("Failed to fetch user profile: {}", e);
                    self.api.logout();
                }
            }
        }
        self.state.update(|state| state.is_loading = false);
    }

    pub fn login(&self, profile: UserProfile) {
        self.state.update(|state| state.user = Some(profile));
    }

    pub fn logout(&self) {
        self.api.logout();
        self.state.update(|state| state.user = None);
        log::info!("Signed out");
    }

    pub async fn refresh_user(&self) {
        match self.api.get_profile().await {
            Ok(profile) => self.login(profile),
            Err(e) => {
                log::error!("Failed to refresh user: {}", e);
                self.logout();
            }
        }
    }

    /// Exchange credentials for tokens, then load the profile. If the
    /// profile cannot be loaded the fresh tokens are discarded again.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        self.api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        let profile = match self.api.get_profile().await {
            Ok(profile) => profile,
            Err(e) => {
                self.api.logout();
                return Err(e);
            }
        };
        self.login(profile.clone());
        Ok(profile)
    }

    /// Register, then sign straight in with the same credentials.
    pub async fn sign_up(&self, username: &str, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        let response = self
            .api
            .register(&RegisterRequest {
                email: email.to_string(),
                password: password.to_string(),
                username: username.to_string(),
            })
            .await?;
        log::info!("{}", response.message);
        self.sign_in(email, password).await
    }
}

/// Create the auth container, provide it, and start the token check.
pub fn provide_auth_context() -> AuthContext {
    let config = use_config();
    let api = ApiClient::new(
        Arc::new(FetchTransport),
        Credentials::browser(config.auth_token_tier),
        config.api_base_url.clone(),
    );
    let context = AuthStore::new(RwSignal::new(AuthState::default()), api);
    provide_context(context.clone());

    let startup = context.clone();
    spawn_local(async move { startup.check_auth().await });

    context
}

pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
