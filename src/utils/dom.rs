//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL hash (without the '#' prefix).
pub fn get_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
        .trim_start_matches('#')
        .to_string()
}

/// Set the URL hash (adds to browser history and fires `hashchange`).
///
/// The hash should include the '#' prefix.
pub fn set_hash(hash: &str) {
    if let Some(window) = window() {
        let _ = window.location().set_hash(hash);
    }
}

/// Scroll the page back to the top (after changing listing pages).
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// =============================================================================
// Downloads
// =============================================================================

/// Start a browser download of `url`, suggesting `file_name`.
///
/// Uses a detached anchor so the browser streams the file to disk instead
/// of buffering it in memory.
pub fn trigger_download(url: &str, file_name: &str) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Ok(anchor) = document
        .create_element("a")
        .map(|el| el.unchecked_into::<HtmlAnchorElement>())
    else {
        return false;
    };
    anchor.set_href(url);
    anchor.set_download(file_name);
    anchor.click();
    true
}
