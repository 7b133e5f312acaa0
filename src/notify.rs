//! Notifications
//!
//! Blocking `window.alert` used for every operator-facing message.

use storefront_core::StoreError;

pub fn notify(message: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window to show: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}

/// Log the error and show its operator-facing text
pub fn notify_error(err: &StoreError) {
    log::warn!("{}", err);
    notify(&err.user_message());
}
