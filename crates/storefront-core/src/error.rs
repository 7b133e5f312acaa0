//! Storefront Errors
//!
//! Every failure a storefront operation can surface to the operator.

use thiserror::Error;

/// Errors raised by lookup, checkout and admin operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No inventory item with this code
    #[error("Item not found: {0}")]
    NotFound(String),

    /// Backend could not be reached (connection refused, DNS, CORS, timeout)
    #[error("Backend not reachable: {0}")]
    Unreachable(String),

    /// Checkout attempted with nothing in the cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Missing or malformed input, rejected before any request is made
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend answered with a non-2xx status
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Server { status: u16, message: Option<String> },

    /// Backend answered 2xx with a body we could not decode
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Text shown to the operator in a notification
    pub fn user_message(&self) -> String {
        match self {
            StoreError::NotFound(_) => "Item not found".to_string(),
            StoreError::Unreachable(_) => "Backend not reachable!".to_string(),
            StoreError::EmptyCart => "Cart is empty!".to_string(),
            StoreError::Validation(msg) => msg.clone(),
            StoreError::Server { status, message } => message
                .clone()
                .unwrap_or_else(|| format!("Request failed with status {}", status)),
            StoreError::MalformedResponse(_) => "Unexpected response from backend".to_string(),
        }
    }

    /// True for transport-level failures, i.e. the backend is down
    pub fn is_unreachable(&self) -> bool {
        matches!(self, StoreError::Unreachable(_))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Unreachable(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::MalformedResponse(e.to_string())
    }
}
