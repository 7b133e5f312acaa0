//! Storefront Models
//!
//! Data structures exchanged with the inventory/billing backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::money::Money;

/// Inventory record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub sku: String,
    pub name: String,
    pub price: Money,
    /// Backends may report oversold items as negative stock
    #[serde(default)]
    pub stock: i64,
}

/// Validated payload for `POST /add-item`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub sku: String,
    pub name: String,
    pub price: Money,
    pub stock: u32,
}

/// Acknowledgment of `POST /add-item`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddedItem {
    pub message: String,
    pub item: InventoryItem,
}

/// A purchased line inside a bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillLine {
    #[serde(default)]
    pub sku: Option<String>,
    pub name: String,
    pub price: Money,
    pub qty: u32,
    #[serde(default)]
    pub line_total: Option<Money>,
}

impl BillLine {
    pub fn line_total(&self) -> Money {
        self.line_total.unwrap_or(self.price * self.qty)
    }
}

/// Finalized checkout as recorded by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub items: Vec<BillLine>,
    pub total: Money,
}

/// Pair each bill with its display number (position + 1)
pub fn numbered_bills(bills: &[Bill]) -> Vec<(usize, Bill)> {
    bills.iter().cloned().enumerate().map(|(idx, bill)| (idx + 1, bill)).collect()
}

/// Body of `POST /checkout`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutRequest {
    pub cart: Vec<CartLine>,
    pub total: Money,
}

/// Acknowledgment of `POST /checkout`
///
/// Some backends answer `{message, total}`, others `{message, bill}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CheckoutReceipt {
    pub message: String,
    #[serde(default)]
    pub total: Option<Money>,
    #[serde(default)]
    pub bill: Option<Bill>,
}

impl CheckoutReceipt {
    /// Backend's total if it sent one, else the total we submitted
    pub fn authoritative_total(&self, submitted: Money) -> Money {
        self.total
            .or_else(|| self.bill.as_ref().map(|b| b.total))
            .unwrap_or(submitted)
    }
}

/// `GET /health` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub time: Option<String>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
