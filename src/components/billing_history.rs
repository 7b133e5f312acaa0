//! Billing History Component
//!
//! One card per bill, numbered from the most recent.

use leptos::prelude::*;
use storefront_core::numbered_bills;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BillingHistory() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <Show
            when=move || store.bills().with(|bills| !bills.is_empty())
            fallback=|| view! { <p class="empty">"No billing records yet."</p> }
        >
            <div class="bills">
                {
                    let ctx = ctx.clone();
                    move || {
                        let ctx = ctx.clone();
                        store.bills().with(|bills| numbered_bills(bills)).into_iter().map(move |(number, bill)| {
                            let when = bill
                                .timestamp
                                .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
                                .unwrap_or_default();
                            let lines = bill.items.iter().map(|line| {
                                let text = format!("{} × {} = {}", line.name, line.qty, ctx.money(line.line_total()));
                                view! { <li>{text}</li> }
                            }).collect_view();
                            view! {
                                <div class="bill-card">
                                    <h4>{format!("Bill #{}", number)}</h4>
                                    <small class="bill-time">{when}</small>
                                    <ul class="bill-lines">{lines}</ul>
                                    <strong>{format!("Total: {}", ctx.money(bill.total))}</strong>
                                </div>
                            }
                        }).collect_view()
                    }
                }
            </div>
        </Show>
    }
}
