//! Client Routes
//!
//! Two views: the guide at `/` and the contribution review at `/admin`.
//! Navigation uses the History API so back/forward keep working.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Guide,
    Admin,
}

impl Route {
    /// Unknown paths fall back to the guide
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/admin" | "admin" => Route::Admin,
            _ => Route::Guide,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Guide => "/",
            Route::Admin => "/admin",
        }
    }

    /// Route of the current window location
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Route::from_path(&path))
            .unwrap_or_default()
    }
}

/// Push a history entry for `route`
pub fn push_history(route: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
        web_sys::console::warn_2(&"[Route] pushState failed:".into(), &e);
    }
}
