//! Section Panel Component
//!
//! One section of the guide: heading, entry grid and the optional comments.
//! The panel is keyed by section id, so narrowing a search only swaps its
//! cards and an open comments panel keeps its subscription.

use leptos::prelude::*;

use crate::components::{CommentsPanel, EntryCard};
use crate::models::Section;
use crate::store::{store_toggle_comments, use_guide_store, GuideStateStoreFields};

#[component]
pub fn SectionPanel(section_id: String, section: Memo<Section>) -> impl IntoView {
    let store = use_guide_store();
    let id = StoredValue::new(section_id);
    let comments_open = move || id.with_value(|id| store.open_comments().with(|open| open.contains(id)));

    let cards = move || {
        section
            .get()
            .items
            .into_iter()
            .map(|entry| view! { <EntryCard entry=entry /> })
            .collect_view()
    };

    view! {
        <section class="section-panel">
            <div class="section-head">
                <span class="section-icon" style=move || section.with(|s| format!("color: {}", s.color))>
                    {move || section.with(|s| s.icon.clone())}
                </span>
                <h2>{move || section.with(|s| s.label.clone())}</h2>
                <span class="section-count">{move || section.with(|s| s.items.len())}</span>
                <button
                    class="comments-toggle"
                    on:click=move |_| id.with_value(|id| store_toggle_comments(&store, id))
                >
                    {move || if comments_open() { "Hide Comments" } else { "Show Comments" }}
                </button>
            </div>
            <div class="entry-grid">{cards}</div>
            <Show when=comments_open>
                <CommentsPanel section_id=id.get_value() />
            </Show>
        </section>
    }
}
