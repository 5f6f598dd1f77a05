//! Command Guide Frontend App
//!
//! Loads the guide once, wires the comment event stream and switches
//! between the guide and admin views.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{AdminPanel, GuidePage};
use crate::context::AppContext;
use crate::route::Route;
use crate::store::{store_set_content, GuideState, GuideStore};
use crate::theme;

fn log_error(msg: String) {
    web_sys::console::error_1(&format!("[App] {}", msg).into());
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(theme::load_dark_mode(), Route::current());
    provide_context(ctx);

    let store: GuideStore = Store::new(GuideState::default());
    provide_context(store);

    // Browser back/forward
    let _ = window_event_listener(ev::popstate, move |_| ctx.route.set(Route::current()));

    spawn_local(async move {
        if let Err(e) = commands::listen_comments_updated(move |update| ctx.apply_comments(update)).await {
            log_error(format!("Comment events unavailable: {}", e));
        }
        match commands::comments_status().await {
            Ok(status) => ctx.comments_status.set(Some(status)),
            Err(e) => log_error(format!("Comment status failed: {}", e)),
        }
    });

    spawn_local(async move {
        let info = match commands::get_guide_info().await {
            Ok(info) => info,
            Err(e) => {
                log_error(format!("Guide info failed: {}", e));
                Default::default()
            }
        };
        match commands::list_sections().await {
            Ok(sections) => {
                web_sys::console::log_1(&format!("[App] Loaded {} sections", sections.len()).into());
                store_set_content(&store, info, sections);
            }
            Err(e) => log_error(format!("Loading sections failed: {}", e)),
        }
    });

    view! {
        <div class=move || theme::root_class(ctx.dark_mode.get())>
            {move || match ctx.route.get() {
                Route::Guide => view! { <GuidePage /> }.into_any(),
                Route::Admin => view! { <AdminPanel /> }.into_any(),
            }}
        </div>
    }
}
