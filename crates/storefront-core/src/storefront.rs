//! Storefront Service
//!
//! Scan-to-cart and checkout against any `Backend`.

use log::{debug, info, warn};

use crate::backend::Backend;
use crate::cart::Cart;
use crate::error::{StoreError, StoreResult};
use crate::models::{CheckoutReceipt, CheckoutRequest, HealthStatus, InventoryItem};
use crate::money::Money;

/// Result of a successful checkout
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutOutcome {
    pub receipt: CheckoutReceipt,
    /// Total the backend reports for the bill
    pub total: Money,
    /// The cart after checkout: always empty
    pub cart: Cart,
}

/// Cart and checkout operations
#[derive(Debug, Clone)]
pub struct Storefront<B> {
    backend: B,
}

impl<B: Backend> Storefront<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch the inventory record for a scanned or typed code
    pub async fn lookup(&self, code: &str) -> StoreResult<InventoryItem> {
        let code = code.trim();
        if code.is_empty() {
            return Err(StoreError::Validation("Enter barcode!".to_string()));
        }
        let item = self.backend.fetch_item(code).await.map_err(|e| {
            warn!("lookup of {} failed: {}", code, e);
            e
        })?;
        debug!("scanned {} ({})", item.sku, item.name);
        Ok(item)
    }

    /// Look up `code` and return `cart` with the item added.
    ///
    /// On any failure the caller keeps its current cart. Callers holding a
    /// live cart should prefer `lookup` and merge into whatever the cart is
    /// when the response arrives.
    pub async fn scan(&self, cart: &Cart, code: &str) -> StoreResult<Cart> {
        let item = self.lookup(code).await?;
        Ok(cart.with_item(&item))
    }

    /// Submit the cart; an empty cart is rejected without a request.
    pub async fn checkout(&self, cart: &Cart) -> StoreResult<CheckoutOutcome> {
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        let request = CheckoutRequest {
            cart: cart.lines().to_vec(),
            total: cart.total(),
        };
        let receipt = self.backend.submit_checkout(&request).await.map_err(|e| {
            warn!("checkout of {} lines failed: {}", request.cart.len(), e);
            e
        })?;
        let total = receipt.authoritative_total(request.total);
        info!("checkout complete: {} ({} lines)", total, request.cart.len());
        Ok(CheckoutOutcome {
            receipt,
            total,
            cart: cart.cleared(),
        })
    }

    pub async fn status(&self) -> StoreResult<HealthStatus> {
        self.backend.health().await
    }
}
