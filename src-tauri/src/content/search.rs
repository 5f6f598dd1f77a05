//! Filter/Search Engine
//!
//! Plain case-insensitive substring search. No tokenization or ranking;
//! section and entry order always follow the content file.

use serde::Serialize;

use crate::domain::Section;

/// Sections to display for the current query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideView {
    /// The query when in search mode, `None` when browsing one section
    pub query: Option<String>,
    pub sections: Vec<Section>,
    /// Search mode produced nothing
    pub no_results: bool,
}

/// Keep entries whose title, either command variant or note contains
/// `query`, ignoring case. Sections left without entries are dropped.
pub fn filter_sections(sections: &[Section], query: &str) -> Vec<Section> {
    let needle = query.to_lowercase();
    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<_> = section
                .items
                .iter()
                .filter(|entry| entry.matches(&needle))
                .cloned()
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(Section {
                    items,
                    ..section.clone()
                })
            }
        })
        .collect()
}

/// Search mode for a non-blank query, otherwise browse the active section.
///
/// Browsing without a selection shows the first section.
pub fn guide_view(sections: &[Section], query: &str, active_section: Option<&str>) -> GuideView {
    if query.trim().is_empty() {
        let selected = match active_section {
            Some(id) => sections.iter().find(|s| s.id == id),
            None => sections.first(),
        };
        return GuideView {
            query: None,
            sections: selected.cloned().into_iter().collect(),
            no_results: false,
        };
    }

    let matches = filter_sections(sections, query);
    GuideView {
        query: Some(query.to_string()),
        no_results: matches.is_empty(),
        sections: matches,
    }
}
