//! Code Entry Component
//!
//! Text box for typing a barcode when no scanner is available.

use leptos::prelude::*;

/// Manual barcode entry; blank input is ignored
#[component]
pub fn CodeEntry(#[prop(into)] on_code: Callback<String>) -> impl IntoView {
    let (code, set_code) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let entered = code.get().trim().to_string();
        if entered.is_empty() {
            return;
        }
        on_code.run(entered);
        set_code.set(String::new());
    };

    view! {
        <form class="code-entry" on:submit=submit>
            <input
                type="text"
                placeholder="Enter barcode manually"
                prop:value=move || code.get()
                on:input=move |ev| set_code.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add Item"</button>
        </form>
    }
}
