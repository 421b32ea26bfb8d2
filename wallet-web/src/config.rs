//! Application configuration
//!
//! Values are baked in at compile time from the build environment
//! (`WALLET_API_URL=https://api.example.com trunk build`), falling back to
//! the local development backend.

use leptos::prelude::*;

use crate::services::storage::StorageTier;
use crate::utils::constants::{
    DEFAULT_API_BASE, DEFAULT_CURRENCY, DEFAULT_LOCALE, RECENT_TRANSACTIONS_LIMIT,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the auth endpoints (`{api_base_url}/api/auth/...`)
    pub api_base_url: String,
    /// Prefix of the wallet endpoints (`{wallet_api_url}/wallet/...`)
    pub wallet_api_url: String,
    /// Where the auth layer persists the token pair
    pub auth_token_tier: StorageTier,
    /// Where the wallet layer looks for the access token
    pub wallet_token_tier: StorageTier,
    pub currency: String,
    pub locale: String,
    pub recent_transactions_limit: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("WALLET_API_URL"),
            option_env!("WALLET_SERVICE_URL"),
            option_env!("WALLET_TOKEN_TIER"),
        )
    }

    fn from_values(api_url: Option<&str>, wallet_url: Option<&str>, wallet_tier: Option<&str>) -> Self {
        let api_base_url = api_url
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        let wallet_api_url = match wallet_url.filter(|url| !url.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}/api", api_base_url),
        };

        let wallet_token_tier = match wallet_tier.and_then(StorageTier::parse) {
            Some(tier) => tier,
            None => {
                if let Some(raw) = wallet_tier {
                    log::warn!("Unknown WALLET_TOKEN_TIER '{}', using local storage", raw);
                }
                StorageTier::Local
            }
        };

        Self {
            api_base_url,
            wallet_api_url,
            auth_token_tier: StorageTier::Session,
            wallet_token_tier,
            currency: DEFAULT_CURRENCY.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            recent_transactions_limit: RECENT_TRANSACTIONS_LIMIT,
        }
    }
}

/// Config provided at the app root.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env)
}
