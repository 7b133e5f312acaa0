//! HTTP Backend
//!
//! `reqwest` client for the REST backend. Uses the browser `fetch` API when
//! compiled to wasm.

use async_trait::async_trait;
use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::response::{decode_item_response, decode_response};
use super::Backend;
use crate::config::StorefrontConfig;
use crate::error::StoreResult;
use crate::models::{AddedItem, Bill, CheckoutReceipt, CheckoutRequest, HealthStatus, InventoryItem, NewItem};

/// Backend reached over HTTP at `config.api_base_url`
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    config: StorefrontConfig,
}

impl HttpBackend {
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// URL for `GET /item/{sku}` with the SKU percent-encoded
    pub fn item_url(&self, sku: &str) -> String {
        let encoded = utf8_percent_encode(sku, NON_ALPHANUMERIC);
        self.config.endpoint(&format!("/item/{}", encoded))
    }

    async fn read(response: reqwest::Response) -> StoreResult<(u16, String)> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }

    async fn get_raw(&self, url: String) -> StoreResult<(u16, String)> {
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            e
        })?;
        Self::read(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> StoreResult<T> {
        let (status, body) = self.get_raw(self.config.endpoint(path)).await?;
        decode_response(status, &body)
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, payload: &B) -> StoreResult<T> {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(payload).send().await.map_err(|e| {
            warn!("POST {} failed: {}", url, e);
            e
        })?;
        let (status, body) = Self::read(response).await?;
        decode_response(status, &body)
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn fetch_item(&self, sku: &str) -> StoreResult<InventoryItem> {
        let (status, body) = self.get_raw(self.item_url(sku)).await?;
        decode_item_response(sku, status, &body)
    }

    async fn fetch_inventory(&self) -> StoreResult<Vec<InventoryItem>> {
        self.get("/inventory").await
    }

    async fn fetch_billing_history(&self) -> StoreResult<Vec<Bill>> {
        self.get("/billing-history").await
    }

    async fn submit_checkout(&self, request: &CheckoutRequest) -> StoreResult<CheckoutReceipt> {
        self.post("/checkout", request).await
    }

    async fn submit_item(&self, item: &NewItem) -> StoreResult<AddedItem> {
        self.post("/add-item", item).await
    }

    async fn health(&self) -> StoreResult<HealthStatus> {
        self.get("/health").await
    }
}
