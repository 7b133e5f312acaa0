//! Application Context
//!
//! Configuration and backend services provided via Leptos Context API.

use leptos::prelude::*;
use storefront_core::{Admin, HttpBackend, StorefrontConfig, Storefront};

/// App-wide services, built once from the startup configuration
#[derive(Clone)]
pub struct AppContext {
    pub config: StorefrontConfig,
    pub storefront: Storefront<HttpBackend>,
    pub admin: Admin<HttpBackend>,
}

impl AppContext {
    pub fn new(config: StorefrontConfig) -> Self {
        let backend = HttpBackend::new(config.clone());
        Self {
            storefront: Storefront::new(backend.clone()),
            admin: Admin::new(backend),
            config,
        }
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: storefront_core::Money) -> String {
        amount.display_with(&self.config.currency_symbol)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
