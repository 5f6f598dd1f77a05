//! Dark Mode Persistence
//!
//! The flag lives in local storage under `darkMode` as JSON text.

pub const DARK_MODE_KEY: &str = "darkMode";

/// Absent or unreadable values mean light mode
pub fn parse_dark_mode(raw: Option<&str>) -> bool {
    raw.and_then(|value| serde_json::from_str::<bool>(value).ok())
        .unwrap_or(false)
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_dark_mode() -> bool {
    let raw = storage().and_then(|s| s.get_item(DARK_MODE_KEY).ok().flatten());
    parse_dark_mode(raw.as_deref())
}

pub fn save_dark_mode(dark: bool) {
    let Some(storage) = storage() else {
        return;
    };
    let value = if dark { "true" } else { "false" };
    if storage.set_item(DARK_MODE_KEY, value).is_err() {
        web_sys::console::warn_1(&"[Theme] Could not persist dark mode".into());
    }
}

/// Class of the root element
pub fn root_class(dark: bool) -> &'static str {
    if dark {
        "app-root dark"
    } else {
        "app-root light"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dark_mode() {
        assert!(parse_dark_mode(Some("true")));
        assert!(!parse_dark_mode(Some("false")));
        assert!(!parse_dark_mode(None));
        assert!(!parse_dark_mode(Some("yes please")));
        assert!(!parse_dark_mode(Some("")));
    }
}
