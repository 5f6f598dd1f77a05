//! Entry Card Component
//!
//! Collapsible card for one guide entry. Clicks inside the expanded area
//! never reach the collapse toggle.

use leptos::prelude::*;

use crate::components::PlatformBlock;
use crate::models::{CardState, Entry, EntryKind};

#[component]
pub fn KindBadge(kind: EntryKind) -> impl IntoView {
    view! {
        <span class="kind-badge" style=format!("background: {}", kind.color())>
            {kind.label()}
        </span>
    }
}

#[component]
pub fn EntryCard(entry: Entry) -> impl IntoView {
    let card = RwSignal::new(CardState::default());
    let expanded = move || card.get().expanded;
    let note = entry.note.clone().filter(|n| !n.trim().is_empty());
    let details = StoredValue::new((entry.clone(), note));

    view! {
        <div class="entry-card" class:open=expanded on:click=move |_| card.update(CardState::toggle)>
            <div class="entry-head">
                <KindBadge kind=entry.kind />
                <span class="entry-title">{entry.title.clone()}</span>
                <span class="entry-chevron" class:rotated=expanded>"▾"</span>
            </div>
            <Show when=expanded>
                <div class="entry-details" on:click=|ev| ev.stop_propagation()>
                    {move || {
                        let (entry, note) = details.get_value();
                        view! {
                            <PlatformBlock entry=entry card=card />
                            {note.map(|note| view! { <p class="entry-note">{note}</p> })}
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
