//! Admin Page
//!
//! Inventory management and billing history.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use storefront_core::Screen;

use crate::components::{AddItemForm, BillingHistory, InventoryTable, StatusBanner};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Load inventory and billing history on mount
    let admin = ctx.admin.clone();
    Effect::new(move |_| {
        let admin = admin.clone();
        spawn_local(async move {
            let snapshot = admin.load_snapshot().await;
            log::debug!(
                "admin snapshot: inventory ok={}, billing ok={}",
                snapshot.inventory.is_ok(),
                snapshot.billing_history.is_ok()
            );
            store.backend_reachable().set(snapshot.backend_reachable());
            store.inventory().set(snapshot.inventory_or_empty());
            store.bills().set(snapshot.billing_or_empty());
        });
    });

    let reachable = Signal::derive(move || store.backend_reachable().get());

    view! {
        <div class="admin">
            <h1>"🛒 " {Screen::Admin.title()}</h1>
            <nav class="screen-nav">
                <A href=Screen::Storefront.path()>"← Back to Home"</A>
            </nav>
            <StatusBanner reachable=reachable message="Backend not reachable or not running" />

            <AddItemForm />

            <h2>"📦 Inventory"</h2>
            <InventoryTable />

            <h2>"🧾 Billing History"</h2>
            <BillingHistory />
        </div>
    }
}
