//! Storefront Core
//!
//! Target-independent logic behind the storefront UI:
//! - models/money: wire types for inventory, carts and bills
//! - cart: immutable cart aggregation
//! - backend: transport trait and its HTTP implementation
//! - storefront/admin: the operations the two screens perform
//! - routes: screen selection by path

pub mod admin;
pub mod backend;
pub mod cart;
pub mod config;
pub mod debounce;
pub mod error;
pub mod models;
pub mod money;
pub mod routes;
pub mod storefront;

mod tests;

pub use admin::{add_failure_message, with_appended, AddItemForm, Admin, AdminSnapshot, GENERIC_ADD_FAILURE, MAX_PRICE};
pub use backend::{Backend, HttpBackend};
pub use cart::{Cart, CartLine};
pub use config::StorefrontConfig;
pub use debounce::ScanDebouncer;
pub use error::{StoreError, StoreResult};
pub use models::{numbered_bills, AddedItem, Bill, BillLine, CheckoutReceipt, CheckoutRequest, HealthStatus, InventoryItem, NewItem};
pub use money::Money;
pub use routes::Screen;
pub use storefront::{CheckoutOutcome, Storefront};
