//! Response Classification
//!
//! Maps an HTTP status and body onto a decoded value or a `StoreError`.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{StoreError, StoreResult};
use crate::models::InventoryItem;

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a 2xx body as `T`; anything else becomes `StoreError::Server`
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> StoreResult<T> {
    if !is_success(status) {
        return Err(StoreError::Server { status, message: error_message(body) });
    }
    serde_json::from_str(body).map_err(|e| match error_message(body) {
        Some(message) => StoreError::Server { status, message: Some(message) },
        None => StoreError::from(e),
    })
}

/// `GET /item/{sku}` additionally treats 404 and `{error}` bodies as a miss
pub fn decode_item_response(sku: &str, status: u16, body: &str) -> StoreResult<InventoryItem> {
    if status == 404 || (is_success(status) && error_message(body).is_some()) {
        return Err(StoreError::NotFound(sku.to_string()));
    }
    decode_response(status, body)
}
