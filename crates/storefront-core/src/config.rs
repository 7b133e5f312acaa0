//! Storefront Configuration
//!
//! Built once at startup and passed to whatever needs it.

use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CURRENCY: &str = "₹";

/// Runtime configuration for the storefront client
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Backend base URL, without trailing slash
    pub api_base_url: String,
    /// Symbol prefixed to every displayed amount
    pub currency_symbol: String,
    /// Minimum level written to the console
    pub log_level: LevelFilter,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl StorefrontConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self::default().with_api_base_url(api_base_url)
    }

    /// Read `STOREFRONT_API_URL`, `STOREFRONT_CURRENCY` and `STOREFRONT_LOG`
    /// as captured at compile time. The browser has no process environment.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("STOREFRONT_API_URL"),
            option_env!("STOREFRONT_CURRENCY"),
            option_env!("STOREFRONT_LOG"),
        )
    }

    fn from_values(url: Option<&str>, currency: Option<&str>, level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            config = config.with_api_base_url(url);
        }
        if let Some(symbol) = currency.filter(|c| !c.is_empty()) {
            config.currency_symbol = symbol.to_string();
        }
        if let Some(level) = level.and_then(|l| l.parse().ok()) {
            config.log_level = level;
        }
        config
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL for a backend path such as `/inventory`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
