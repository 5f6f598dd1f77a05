//! Clipboard
//!
//! Text goes straight to `navigator.clipboard`.

use wasm_bindgen::prelude::*;
use super::error_text;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn write_text(text: &str) -> Result<JsValue, JsValue>;
}

pub async fn copy_text(text: &str) -> Result<(), String> {
    write_text(text).await.map(|_| ()).map_err(error_text)
}
