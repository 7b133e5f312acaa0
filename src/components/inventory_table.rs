//! Inventory Table Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <Show
            when=move || store.inventory().with(|items| !items.is_empty())
            fallback=|| view! { <p class="empty">"No items in inventory."</p> }
        >
            <table class="inventory">
                <thead>
                    <tr>
                        <th>"SKU"</th>
                        <th>"Name"</th>
                        <th>"Price"</th>
                        <th>"Stock"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || store.inventory().get()
                        key=|item| item.sku.clone()
                        children={
                            let ctx = ctx.clone();
                            move |item| view! {
                                <tr>
                                    <td>{item.sku.clone()}</td>
                                    <td>{item.name.clone()}</td>
                                    <td>{ctx.money(item.price)}</td>
                                    <td>{item.stock}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
