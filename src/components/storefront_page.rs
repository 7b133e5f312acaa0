//! Storefront Page
//!
//! Scan or type codes into the cart, then check out.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use storefront_core::Screen;

use crate::components::{CartView, CodeEntry, ScannerPanel, StatusBanner};
use crate::context::use_app_context;
use crate::notify::{notify, notify_error};
use crate::store::{store_add_to_cart, use_app_store, AppStateStoreFields};

/// How long the post-checkout message stays up
const FLASH_MS: u32 = 4_000;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (online, set_online) = signal(true);
    let (flash, set_flash) = signal::<Option<String>>(None);

    // Ping the backend on mount
    let shop = ctx.storefront.clone();
    Effect::new(move |_| {
        let shop = shop.clone();
        spawn_local(async move {
            match shop.status().await {
                Ok(status) => set_online.set(status.is_ok()),
                Err(e) => {
                    log::warn!("health check failed: {}", e);
                    set_online.set(false);
                }
            }
        });
    });

    let shop = ctx.storefront.clone();
    let add_code = Callback::new(move |code: String| {
        let shop = shop.clone();
        spawn_local(async move {
            match shop.lookup(&code).await {
                Ok(item) => {
                    store_add_to_cart(&store, &item);
                    set_online.set(true);
                }
                Err(e) => {
                    if e.is_unreachable() {
                        set_online.set(false);
                    }
                    notify_error(&e);
                }
            }
        });
    });

    let checkout_ctx = ctx.clone();
    let checkout = Callback::new(move |_: ()| {
        let ctx = checkout_ctx.clone();
        let cart = store.cart().get_untracked();
        spawn_local(async move {
            match ctx.storefront.checkout(&cart).await {
                Ok(outcome) => {
                    store.cart().set(outcome.cart);
                    notify(&format!("✅ {}\nTotal Bill: {}", outcome.receipt.message, ctx.money(outcome.total)));
                    set_flash.set(Some("Checkout successful!".to_string()));
                    Timeout::new(FLASH_MS, move || set_flash.set(None)).forget();
                }
                Err(e) => notify_error(&e),
            }
        });
    });

    view! {
        <div class="storefront">
            <h1>"🛒 " {Screen::Storefront.title()}</h1>
            <StatusBanner reachable=online message="Backend not reachable" />

            <div class="entry-row">
                <ScannerPanel on_code=add_code />
                <CodeEntry on_code=add_code />
            </div>

            <CartView on_checkout=checkout />

            {move || flash.get().map(|msg| view! { <p class="flash">{msg}</p> })}

            <nav class="screen-nav">
                <A href=Screen::Admin.path()>"Admin Dashboard"</A>
            </nav>
        </div>
    }
}
