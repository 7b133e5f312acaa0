//! Scanner Panel Component
//!
//! Starts the camera scanner on demand and forwards decoded codes.

use std::cell::RefCell;

use leptos::prelude::*;
use storefront_core::ScanDebouncer;

use crate::notify::notify;
use crate::scanner::{self, ScannerConfig};

const READER_ID: &str = "reader";

#[component]
pub fn ScannerPanel(#[prop(into)] on_code: Callback<String>) -> impl IntoView {
    let (scanning, set_scanning) = signal(false);

    let start = move |_| {
        set_scanning.set(true);
        let debouncer = RefCell::new(ScanDebouncer::default());
        let result = scanner::start(READER_ID, &ScannerConfig::default(), move |decoded: String| {
            if debouncer.borrow_mut().accept(&decoded, js_sys::Date::now()) {
                on_code.run(decoded);
            }
        });
        if let Err(e) = result {
            log::error!("scanner failed to start: {}", e);
            notify("Could not start the scanner");
            set_scanning.set(false);
        }
    };

    view! {
        <div class="scanner-panel">
            <Show when=move || !scanning.get()>
                <button class="scan-btn" on:click=start>"Start Scanner"</button>
            </Show>
            <div id=READER_ID class="reader"></div>
        </div>
    }
}
