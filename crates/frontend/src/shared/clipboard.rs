//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. The write is fire-and-forget: failures are
//! swallowed, the UI only tracks that a copy was requested.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard, best-effort.
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await;
        }
    });
}
