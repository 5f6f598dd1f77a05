//! Guide State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{GuideInfo, Section};

/// Everything the guide view shares between components
#[derive(Clone, Debug, Default, Store)]
pub struct GuideState {
    pub info: GuideInfo,
    /// All sections in content order
    pub sections: Vec<Section>,
    /// Selected sidebar section; reset to the first section on load
    pub active_section: String,
    /// Raw search box text
    pub search: String,
    /// Sections whose comment panel is open
    pub open_comments: HashSet<String>,
}

/// Type alias for the store
pub type GuideStore = Store<GuideState>;

/// Get the guide store from context
pub fn use_guide_store() -> GuideStore {
    expect_context::<GuideStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install loaded content and select the first section
pub fn store_set_content(store: &GuideStore, info: GuideInfo, sections: Vec<Section>) {
    let first = sections.first().map(|s| s.id.clone()).unwrap_or_default();
    store.info().set(info);
    store.sections().set(sections);
    store.active_section().set(first);
}

/// Selecting a section clears the search
pub fn store_select_section(store: &GuideStore, section_id: &str) {
    store.active_section().set(section_id.to_string());
    store.search().set(String::new());
}

pub fn store_toggle_comments(store: &GuideStore, section_id: &str) {
    toggle_member(&mut store.open_comments().write(), section_id);
}

/// Sidebar highlight: only while browsing, never during a search
pub fn is_highlighted(active: &str, search: &str, section_id: &str) -> bool {
    search.is_empty() && active == section_id
}

/// Flip membership; returns whether `id` is now present
pub fn toggle_member(set: &mut HashSet<String>, id: &str) -> bool {
    if set.remove(id) {
        false
    } else {
        set.insert(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_member_twice_restores() {
        let mut open = HashSet::new();
        assert!(toggle_member(&mut open, "git"));
        assert!(open.contains("git"));
        assert!(!toggle_member(&mut open, "git"));
        assert!(open.is_empty());
    }

    #[test]
    fn test_panels_toggle_independently() {
        let mut open = HashSet::new();
        toggle_member(&mut open, "git");
        toggle_member(&mut open, "tips");
        toggle_member(&mut open, "git");
        assert_eq!(open.len(), 1);
        assert!(open.contains("tips"));
    }

    #[test]
    fn test_highlight_only_when_browsing() {
        assert!(is_highlighted("git", "", "git"));
        assert!(!is_highlighted("git", "", "tips"));
        assert!(!is_highlighted("git", "status", "git"));
    }
}
