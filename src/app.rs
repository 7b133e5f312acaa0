//! Storefront Frontend App
//!
//! Root component: provides context and store, routes between the two screens.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use reactive_stores::Store;
use storefront_core::{Screen, StorefrontConfig};

use crate::components::{AdminPage, StorefrontPage};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    provide_context(AppContext::new(config));
    provide_context(Store::new(AppState::new()));

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <UnknownRoute /> }>
                    <Route path=path!("/") view=StorefrontPage />
                    <Route path=path!("/admin") view=AdminPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Any unrecognized path goes back to the storefront
#[component]
fn UnknownRoute() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    let target = Screen::resolve(&path);
    log::warn!("unknown route {}, redirecting to {}", path, target.path());

    view! { <Redirect path=target.path() /> }
}
