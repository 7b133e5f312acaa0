//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{with_appended, Bill, Cart, InventoryItem};

/// Session state shared by both screens
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current cart; replaced wholesale on every change
    pub cart: Cart,
    /// Inventory as last fetched by the admin screen
    pub inventory: Vec<InventoryItem>,
    /// Billing history, most recent first
    pub bills: Vec<Bill>,
    /// Whether the last admin snapshot reached the backend
    pub backend_reachable: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            backend_reachable: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Merge a looked-up item into whatever the cart holds now
pub fn store_add_to_cart(store: &AppStore, item: &InventoryItem) {
    let next = store.cart().with_untracked(|cart| cart.with_item(item));
    store.cart().set(next);
}

/// Append a server-confirmed item to the inventory list
pub fn store_append_inventory(store: &AppStore, item: InventoryItem) {
    let next = store.inventory().with_untracked(|inventory| with_appended(inventory, item));
    store.inventory().set(next);
}
