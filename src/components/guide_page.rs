//! Guide Page Component
//!
//! Sidebar, search and the sections the backend selected for the current
//! query. Only the response to the latest request is applied.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{ExternalLink, HeaderBar, SearchBar, SectionPanel, SectionSidebar};
use crate::components::header_bar::issue_form_url;
use crate::models::{GuideView, Section};
use crate::store::{use_guide_store, GuideStateStoreFields};

/// One panel per visible section, keyed by id alone
fn panel_keys(view: &GuideView) -> Vec<String> {
    view.sections.iter().map(|s| s.id.clone()).collect()
}

/// Current items of a section; empty once it left the view
fn visible_section(view: &GuideView, id: &str) -> Section {
    view.sections.iter().find(|s| s.id == id).cloned().unwrap_or_default()
}

#[component]
pub fn GuidePage() -> impl IntoView {
    let store = use_guide_store();
    let (guide_view, set_guide_view) = signal(GuideView::default());
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let query = store.search().get();
        let active = store.active_section().get();
        if store.sections().with(|s| s.is_empty()) {
            return;
        }
        request_seq.update_value(|n| *n += 1);
        let ticket = request_seq.get_value();
        spawn_local(async move {
            let active = Some(active.as_str()).filter(|a| !a.is_empty());
            match commands::search_sections(&query, active).await {
                Ok(view) => {
                    if request_seq.try_get_value() == Some(ticket) {
                        let _ = set_guide_view.try_set(view);
                    }
                }
                Err(e) => web_sys::console::error_1(&format!("[Guide] Search failed: {}", e).into()),
            }
        });
    });

    // Panels live as long as their section stays visible; only their items change
    let section_ids = move || guide_view.with(panel_keys);
    let section_for = move |id: String| Memo::new(move |_| guide_view.with(|view| visible_section(view, &id)));

    let browsing = move || store.search().get().trim().is_empty();
    let contribute_url = move || {
        let repo = store.info().get().repo_url?;
        let active = store.active_section().get();
        let label = store
            .sections()
            .with(|sections| sections.iter().find(|s| s.id == active).map(|s| s.label.clone()));
        let title = label.map(|label| format!("[{}] ", label));
        Some(issue_form_url(&repo, "contribution.yml", title.as_deref()))
    };

    view! {
        <div class="guide-page">
            <HeaderBar />
            <div class="guide-layout">
                <SectionSidebar />
                <main class="guide-main">
                    <SearchBar />
                    <Show when=move || guide_view.get().no_results>
                        <div class="no-results">
                            {move || format!("No results for \"{}\"", store.search().get())}
                        </div>
                    </Show>
                    <For
                        each=section_ids
                        key=|id| id.clone()
                        children=move |id| {
                            let section = section_for(id.clone());
                            view! { <SectionPanel section_id=id section=section /> }
                        }
                    />
                    <Show when=browsing>
                        {move || contribute_url().map(|url| view! {
                            <div class="contributing">
                                <div class="contributing-title">"✦ Contributing"</div>
                                "Have a tip to share? "
                                <ExternalLink href=url class="accent-link">"Submit it via GitHub Issues"</ExternalLink>
                                " and it will be reviewed for inclusion."
                            </div>
                        })}
                    </Show>
                </main>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, EntryKind};

    fn entry(title: &str) -> Entry {
        Entry {
            title: title.to_string(),
            mac: title.to_lowercase(),
            win: title.to_lowercase(),
            note: None,
            kind: EntryKind::Code,
        }
    }

    fn view(query: Option<&str>, titles: &[&str]) -> GuideView {
        GuideView {
            query: query.map(str::to_string),
            sections: vec![Section {
                id: "git".to_string(),
                label: "Git".to_string(),
                icon: String::new(),
                color: String::new(),
                items: titles.iter().map(|t| entry(t)).collect(),
            }],
            no_results: false,
        }
    }

    #[test]
    fn test_narrowing_search_keeps_panel_keys() {
        let broad = view(Some("st"), &["Status", "Stash"]);
        let narrow = view(Some("sta"), &["Status"]);

        assert_eq!(panel_keys(&broad), panel_keys(&narrow));
        assert_eq!(panel_keys(&narrow), vec!["git"]);
        assert_eq!(visible_section(&narrow, "git").items.len(), 1);
    }

    #[test]
    fn test_hidden_section_is_empty() {
        let narrow = view(Some("sta"), &["Status"]);
        assert!(visible_section(&narrow, "tips").items.is_empty());
    }
}
