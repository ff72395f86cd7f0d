//! Small browser-side utilities for the rich-text editor component.
//!
//! - **User feedback**: transient toast notifications for upload problems and
//!   other notices that don't belong inside a dialog.
//! - **Dirty tracking**: MD5 digests of the canonical HTML and the global
//!   `app_dirty` flag the host page consults before unloading.
//! - **Status bar**: locale-formatted counters.

use js_sys::Reflect;
use num_format::{Locale, ToFormattedString};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

const TOAST_DURATION_MS: u32 = 3000;

/// Displays a temporary notification at the bottom of the screen.
///
/// The message is set as text content, never parsed as markup. The toast
/// removes itself after [`TOAST_DURATION_MS`].
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("editor-toast");
    let toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}

/// Hex MD5 digest, used to compare the canonical HTML against its baseline.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Publishes the dirty state as `window.app_dirty` for the host page.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

/// `12,345`-style grouping for the status bar counters.
pub fn format_count(count: usize) -> String {
    count.to_formatted_string(&Locale::en)
}
