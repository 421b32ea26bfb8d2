//! Token persistence
//!
//! The auth layer and the wallet layer each hold a [`Credentials`] handle.
//! A handle is bound to one storage tier; which tier each layer uses comes
//! from [`crate::config::AppConfig`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shared::AuthTokens;

use crate::utils::constants::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY};

/// Browser storage area backing a token store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageTier {
    /// `window.sessionStorage`, cleared when the tab closes
    Session,
    /// `window.localStorage`, survives restarts
    Local,
}

impl StorageTier {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "session" => Some(StorageTier::Session),
            "local" => Some(StorageTier::Local),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StorageTier::Session => "sessionStorage",
            StorageTier::Local => "localStorage",
        }
    }
}

/// Key/value store for tokens.
pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `web_sys::Storage` of the given tier. Storage can be unavailable (privacy
/// modes, sandboxed iframes); reads then miss and writes are dropped.
#[derive(Debug, Clone, Copy)]
pub struct BrowserStorage {
    tier: StorageTier,
}

impl BrowserStorage {
    pub fn new(tier: StorageTier) -> Self {
        Self { tier }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.tier {
            StorageTier::Session => window.session_storage(),
            StorageTier::Local => window.local_storage(),
        };
        match storage {
            Ok(Some(storage)) => Some(storage),
            _ => {
                log::warn!("{} is not available", self.tier.name());
                None
            }
        }
    }
}

impl TokenStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("Failed to write '{}' to {}", key, self.tier.name());
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            storage.remove_item(key).ok();
        }
    }
}

/// In-process store, used where no browser is present.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

/// Explicit handle on the stored token pair.
#[derive(Clone)]
pub struct Credentials {
    store: Arc<dyn TokenStore>,
}

impl Credentials {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn browser(tier: StorageTier) -> Self {
        Self::new(Arc::new(BrowserStorage::new(tier)))
    }

    /// Stored access token; an empty string counts as absent.
    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn save(&self, tokens: &AuthTokens) {
        self.store.set(ACCESS_TOKEN_KEY, &tokens.access_token);
        self.store.set(REFRESH_TOKEN_KEY, &tokens.refresh_token);
    }

    pub fn clear(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("has_access_token", &self.has_access_token())
            .finish()
    }
}
