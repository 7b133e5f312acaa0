//! Add Item Form Component
//!
//! Form for adding a product to the inventory.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{add_failure_message, AddItemForm as ItemFields, StoreError};

use crate::context::use_app_context;
use crate::notify::notify;
use crate::store::{store_append_inventory, use_app_store};

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let admin = ctx.admin.clone();
    let price_label = format!("Price ({})", ctx.config.currency_symbol);

    let (sku, set_sku) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (stock, set_stock) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let reset = move || {
        set_sku.set(String::new());
        set_name.set(String::new());
        set_price.set(String::new());
        set_stock.set(String::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let fields = ItemFields {
            sku: sku.get(),
            name: name.get(),
            price: price.get(),
            stock: stock.get(),
        };
        let admin = admin.clone();
        set_submitting.set(true);
        spawn_local(async move {
            match admin.add_item(&fields).await {
                Ok(added) => {
                    notify(&format!("✅ {}", added.message));
                    store_append_inventory(&store, added.item);
                    reset();
                }
                Err(StoreError::Validation(msg)) => notify(&msg),
                Err(e) => {
                    log::warn!("add item failed: {}", e);
                    notify(&format!("❌ {}", add_failure_message(&e)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="add-item">
            <h3>"➕ Add New Product"</h3>
            <form on:submit=submit>
                <input
                    type="text"
                    placeholder="SKU"
                    prop:value=move || sku.get()
                    on:input=move |ev| set_sku.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder=price_label
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    min="0"
                    placeholder="Stock"
                    prop:value=move || stock.get()
                    on:input=move |ev| set_stock.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || submitting.get()>"Add Item"</button>
            </form>
        </section>
    }
}
