//! Copy Button Component
//!
//! Writes text to the clipboard and confirms for a moment.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::commands;

const CONFIRM_MS: u32 = 1400;

#[component]
pub fn CopyButton(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let value = text.get_untracked();
        spawn_local(async move {
            if let Err(e) = commands::copy_text(&value).await {
                web_sys::console::warn_1(&format!("[Copy] Clipboard write failed: {}", e).into());
            }
            // The card may collapse while we wait
            if set_copied.try_set(true).is_some() {
                return;
            }
            TimeoutFuture::new(CONFIRM_MS).await;
            let _ = set_copied.try_set(false);
        });
    };

    view! {
        <button class="copy-btn" class:copied=move || copied.get() title="Copy" on:click=copy>
            {move || if copied.get() { "✓ copied" } else { "copy" }}
        </button>
    }
}
