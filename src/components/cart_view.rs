//! Cart View Component
//!
//! Cart lines, running total and the checkout button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CartView(#[prop(into)] on_checkout: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let line_ctx = ctx.clone();

    let is_empty = move || store.cart().with(|cart| cart.is_empty());

    view! {
        <section class="cart">
            <h3>{move || match store.cart().with(|cart| cart.item_count()) {
                0 => "🧾 Cart".to_string(),
                1 => "🧾 Cart (1 item)".to_string(),
                n => format!("🧾 Cart ({} items)", n),
            }}</h3>
            <ul class="cart-lines">
                <For
                    each=move || store.cart().with(|cart| cart.lines().to_vec())
                    key=|line| (line.sku.clone(), line.qty)
                    children=move |line| {
                        view! {
                            <li>{format!("{} × {} = {}", line.name, line.qty, line_ctx.money(line.line_total()))}</li>
                        }
                    }
                />
            </ul>
            <Show when=move || !is_empty()>
                <h3>{
                    let ctx = ctx.clone();
                    move || format!("Total: {}", ctx.money(store.cart().with(|cart| cart.total())))
                }</h3>
                <button class="checkout-btn" on:click=move |_| on_checkout.run(())>"Checkout"</button>
            </Show>
        </section>
    }
}
