//! Backend Transport
//!
//! Abstract interface to the inventory/billing service. The HTTP
//! implementation talks to the real backend; tests substitute their own.

mod http;
mod response;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{AddedItem, Bill, CheckoutReceipt, CheckoutRequest, HealthStatus, InventoryItem, NewItem};

pub use http::HttpBackend;
pub use response::{decode_item_response, decode_response};

/// One method per backend endpoint
///
/// Futures are not `Send`: the browser executor is single-threaded.
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /item/{sku}`
    async fn fetch_item(&self, sku: &str) -> StoreResult<InventoryItem>;

    /// `GET /inventory`
    async fn fetch_inventory(&self) -> StoreResult<Vec<InventoryItem>>;

    /// `GET /billing-history`
    async fn fetch_billing_history(&self) -> StoreResult<Vec<Bill>>;

    /// `POST /checkout`
    async fn submit_checkout(&self, request: &CheckoutRequest) -> StoreResult<CheckoutReceipt>;

    /// `POST /add-item`
    async fn submit_item(&self, item: &NewItem) -> StoreResult<AddedItem>;

    /// `GET /health`
    async fn health(&self) -> StoreResult<HealthStatus>;
}
