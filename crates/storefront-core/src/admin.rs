//! Admin Service
//!
//! Inventory/billing snapshot loading and the add-item form.

use futures::join;
use log::{info, warn};

use crate::backend::Backend;
use crate::error::{StoreError, StoreResult};
use crate::models::{AddedItem, Bill, InventoryItem, NewItem};
use crate::money::Money;

pub const GENERIC_ADD_FAILURE: &str = "Failed to add item.";

/// Largest accepted price, in major units
pub const MAX_PRICE: f64 = 10_000_000.0;

/// Raw values of the add-item form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddItemForm {
    pub sku: String,
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl AddItemForm {
    /// Check every field and build the request payload
    pub fn validate(&self) -> StoreResult<NewItem> {
        let sku = self.sku.trim();
        let name = self.name.trim();
        let price = self.price.trim();
        let stock = self.stock.trim();

        if sku.is_empty() || name.is_empty() || price.is_empty() || stock.is_empty() {
            return Err(StoreError::Validation("Please fill all fields".to_string()));
        }

        let price = price
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0)
            .ok_or_else(|| StoreError::Validation("Price must be a non-negative number".to_string()))?;
        if price > MAX_PRICE {
            return Err(StoreError::Validation(format!("Price must be at most {}", Money::from_decimal(MAX_PRICE))));
        }
        let stock = stock
            .parse::<u32>()
            .map_err(|_| StoreError::Validation("Stock must be a non-negative integer".to_string()))?;

        Ok(NewItem {
            sku: sku.to_string(),
            name: name.to_string(),
            price: Money::from_decimal(price),
            stock,
        })
    }
}

/// Inventory and billing history as fetched on activation.
///
/// The two results are independent; one failing does not discard the other.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSnapshot {
    pub inventory: StoreResult<Vec<InventoryItem>>,
    pub billing_history: StoreResult<Vec<Bill>>,
}

impl AdminSnapshot {
    pub fn backend_reachable(&self) -> bool {
        self.inventory.is_ok() && self.billing_history.is_ok()
    }

    /// Inventory to display; empty when the fetch failed
    pub fn inventory_or_empty(&self) -> Vec<InventoryItem> {
        self.inventory.clone().unwrap_or_default()
    }

    pub fn billing_or_empty(&self) -> Vec<Bill> {
        self.billing_history.clone().unwrap_or_default()
    }
}

/// Inventory list with the server-confirmed item appended
pub fn with_appended(inventory: &[InventoryItem], item: InventoryItem) -> Vec<InventoryItem> {
    inventory.iter().cloned().chain(std::iter::once(item)).collect()
}

/// Admin dashboard operations
#[derive(Debug, Clone)]
pub struct Admin<B> {
    backend: B,
}

impl<B: Backend> Admin<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Fetch inventory and billing history concurrently
    pub async fn load_snapshot(&self) -> AdminSnapshot {
        let (inventory, billing_history) = join!(
            self.backend.fetch_inventory(),
            self.backend.fetch_billing_history()
        );
        if let Err(e) = &inventory {
            warn!("inventory fetch failed: {}", e);
        }
        if let Err(e) = &billing_history {
            warn!("billing history fetch failed: {}", e);
        }
        AdminSnapshot { inventory, billing_history }
    }

    /// Validate and submit a new inventory item.
    ///
    /// Returns the item as the server stored it.
    pub async fn add_item(&self, form: &AddItemForm) -> StoreResult<AddedItem> {
        let item = form.validate()?;
        match self.backend.submit_item(&item).await {
            Ok(added) => {
                info!("added item {} ({})", added.item.sku, added.message);
                Ok(added)
            }
            Err(StoreError::Server { status, message: None }) => Err(StoreError::Server {
                status,
                message: Some(GENERIC_ADD_FAILURE.to_string()),
            }),
            Err(StoreError::MalformedResponse(detail)) => {
                warn!("add-item response malformed: {}", detail);
                Err(StoreError::MalformedResponse(detail))
            }
            Err(e) => Err(e),
        }
    }
}

/// Text shown to the operator when adding an item fails
pub fn add_failure_message(err: &StoreError) -> String {
    match err {
        StoreError::Validation(msg) => msg.clone(),
        StoreError::MalformedResponse(_) => GENERIC_ADD_FAILURE.to_string(),
        other => other.user_message(),
    }
}
