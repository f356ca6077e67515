//! Blocking Browser Dialogs

use leptos::prelude::window;

pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}

