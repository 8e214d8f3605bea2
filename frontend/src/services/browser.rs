//! Thin wrappers over browser APIs: object URLs, downloads and scrolling.

use gloo_timers::callback::Timeout;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Blob, BlobPropertyBag, File, HtmlAnchorElement, HtmlInputElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Url,
};

use crate::types::{AppError, AppResult};

fn js_error(context: &str, err: JsValue) -> AppError {
    let detail = js_sys::Reflect::get(&err, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    AppError::Browser(format!("{}: {}", context, detail))
}

/// Create an object URL pointing at the selected image.
pub fn create_preview_url(file: &File) -> AppResult<String> {
    Url::create_object_url_with_blob(file).map_err(|e| js_error("Failed to create preview", e))
}

/// Release an object URL created by [`create_preview_url`].
pub fn revoke_preview_url(url: &str) {
    match Url::revoke_object_url(url) {
        Ok(()) => log::debug!("🧹 Released preview {}", url),
        Err(e) => log::warn!("Could not release preview {}: {:?}", url, e),
    }
}

/// Serialize `value` as pretty JSON and hand it to the browser as a download.
pub fn download_json<T: Serialize>(filename: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Browser(format!("Failed to serialize: {}", e)))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("Failed to create file", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| js_error("Failed to create download link", e))?;

    let anchor = gloo_utils::document()
        .create_element("a")
        .map_err(|e| js_error("Failed to create link", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| AppError::Browser("Created element is not a link".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    revoke_preview_url(&url);
    log::info!("💾 Downloaded {}", filename);
    Ok(())
}

/// Open the native file picker behind a hidden `<input type="file">`.
pub fn open_file_picker(input_id: &str) {
    if let Some(input) = gloo_utils::document().get_element_by_id(input_id) {
        if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
            html_input.click();
        }
    }
}

/// Smoothly scroll the element with `id` to the top of the viewport.
pub fn scroll_to(id: &str) {
    let Some(element) = gloo_utils::document().get_element_by_id(id) else {
        log::debug!("Nothing to scroll to: #{}", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Like [`scroll_to`], after `delay_ms` so freshly mounted views exist.
pub fn scroll_to_after(id: &'static str, delay_ms: u32) {
    Timeout::new(delay_ms, move || scroll_to(id)).forget();
}
