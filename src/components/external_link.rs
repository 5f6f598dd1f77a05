//! External Link Component
//!
//! Anchor that opens its target in the system browser.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;

#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let target = href.clone();
    let open = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let url = target.clone();
        spawn_local(async move {
            if let Err(e) = commands::open_url(&url).await {
                web_sys::console::error_1(&format!("[Link] Failed to open {}: {}", url, e).into());
            }
        });
    };

    view! {
        <a href=href class=class rel="noopener noreferrer" on:click=open>
            {children()}
        </a>
    }
}
