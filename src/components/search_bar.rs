//! Search Bar Component

use leptos::prelude::*;

use crate::store::{use_guide_store, GuideStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_guide_store();

    view! {
        <div class="search-bar">
            <span class="search-icon">"⌕"</span>
            <input
                type="text"
                placeholder="Search commands, shortcuts, tips…"
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
            <Show when=move || !store.search().get().is_empty()>
                <button class="search-clear" on:click=move |_| store.search().set(String::new())>
                    "×"
                </button>
            </Show>
        </div>
    }
}
