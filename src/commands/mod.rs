//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod content;
mod comments;
mod contributions;
mod events;
mod shell;
mod clipboard;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejected promises (command errors) come back as `Err`
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Command errors arrive as plain strings; anything else is stringified
fn error_text(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn call<T: serde::de::DeserializeOwned>(cmd: &str, args: JsValue) -> Result<T, String> {
    let result = invoke(cmd, args).await.map_err(error_text)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

fn to_args<A: serde::Serialize>(args: &A) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())
}

// Re-export all public items
pub use content::*;
pub use comments::*;
pub use contributions::*;
pub use events::*;
pub use shell::*;
pub use clipboard::*;
