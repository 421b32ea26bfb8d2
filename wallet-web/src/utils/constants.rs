//! Application constants

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

// Storage keys shared by both token tiers
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub const DEFAULT_CURRENCY: &str = "NGN";
pub const DEFAULT_LOCALE: &str = "en-NG";

// Funding floor enforced by the API, in kobo
pub const MIN_FUNDING_MINOR_UNITS: i64 = 10_000;
pub const MIN_PASSWORD_LEN: usize = 8;

// UI constants
pub const RECENT_TRANSACTIONS_LIMIT: u32 = 10;
pub const TOAST_DURATION_MS: u32 = 4000;
pub const FLOW_CHART_MONTHS: usize = 6;
