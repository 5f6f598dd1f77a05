//! Platform Block Component
//!
//! Command text with a macOS / Win-Linux selector. Identical variants show
//! one combined label instead of the selector.

use leptos::prelude::*;

use crate::components::CopyButton;
use crate::models::{CardState, Entry, Platform, COMBINED_PLATFORM_LABEL};

#[component]
pub fn PlatformBlock(entry: Entry, card: RwSignal<CardState>) -> impl IntoView {
    let shows_selector = CardState::shows_selector(&entry);
    let entry = StoredValue::new(entry);
    let command = Signal::derive(move || {
        entry.with_value(|entry| card.get().visible_command(entry).to_string())
    });

    let selector = if shows_selector {
        Platform::ALL
            .into_iter()
            .map(|platform| {
                view! {
                    <button
                        class="platform-tab"
                        class:selected=move || card.get().platform == platform
                        on:click=move |ev| {
                            ev.stop_propagation();
                            card.update(|c| c.select(platform));
                        }
                    >
                        {platform.label()}
                    </button>
                }
            })
            .collect_view()
            .into_any()
    } else {
        view! { <div class="platform-combined">{COMBINED_PLATFORM_LABEL}</div> }.into_any()
    };

    view! {
        <div class="platform-block">
            <div class="platform-tabs">{selector}</div>
            <div class="command-box">
                <pre>{move || command.get()}</pre>
                <CopyButton text=command />
            </div>
        </div>
    }
}
