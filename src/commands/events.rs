//! Backend Events
//!
//! Binding to the Tauri event bus for pushed comment lists.

use wasm_bindgen::prelude::*;
use crate::models::CommentsUpdate;
use super::error_text;

pub const COMMENTS_EVENT: &str = "comments-updated";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    async fn listen(event: &str, handler: &Closure<dyn FnMut(JsValue)>) -> Result<JsValue, JsValue>;
}

/// Register `on_update` for the lifetime of the app
pub async fn listen_comments_updated(on_update: impl Fn(CommentsUpdate) + 'static) -> Result<(), String> {
    let handler = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        let payload = match js_sys::Reflect::get(&event, &JsValue::from_str("payload")) {
            Ok(payload) => payload,
            Err(_) => return,
        };
        match serde_wasm_bindgen::from_value::<CommentsUpdate>(payload) {
            Ok(update) => on_update(update),
            Err(e) => web_sys::console::warn_1(&format!("[Events] Bad {} payload: {}", COMMENTS_EVENT, e).into()),
        }
    });
    listen(COMMENTS_EVENT, &handler)
        .await
        .map_err(error_text)?;
    handler.forget();
    Ok(())
}
