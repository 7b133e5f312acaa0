//! Status Banner Component
//!
//! Warning shown while the backend cannot be reached.

use leptos::prelude::*;

#[component]
pub fn StatusBanner(
    #[prop(into)] reachable: Signal<bool>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <Show when=move || !reachable.get()>
            <p class="status-banner">"⚠️ " {message.clone()}</p>
        </Show>
    }
}
