//! Section Sidebar Component

use leptos::prelude::*;

use crate::store::{is_highlighted, store_select_section, use_guide_store, GuideStateStoreFields};

#[component]
pub fn SectionSidebar() -> impl IntoView {
    let store = use_guide_store();

    view! {
        <nav class="sidebar">
            <div class="sidebar-heading">"Sections"</div>
            <For
                each=move || store.sections().get()
                key=|section| section.id.clone()
                children=move |section| {
                    let id = section.id.clone();
                    let id_for_click = section.id.clone();
                    let highlighted = move || {
                        is_highlighted(&store.active_section().get(), &store.search().get(), &id)
                    };
                    view! {
                        <button
                            class="sidebar-item"
                            class:active=highlighted
                            on:click=move |_| store_select_section(&store, &id_for_click)
                        >
                            <span class="sidebar-icon" style=format!("color: {}", section.color)>
                                {section.icon.clone()}
                            </span>
                            <span>{section.label.clone()}</span>
                        </button>
                    }
                }
            />
        </nav>
    }
}
