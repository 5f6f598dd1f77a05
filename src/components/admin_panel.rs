//! Admin Panel Component
//!
//! Lists open contribution issues. Fetched once per visit; a response that
//! arrives after leaving the view is dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::ContributionCard;
use crate::context::use_app_context;
use crate::models::AdminState;
use crate::route::Route;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let ctx = use_app_context();
    let (state, set_state) = signal(AdminState::Loading);

    spawn_local(async move {
        let next = match commands::list_contributions().await {
            Ok(issues) => AdminState::Loaded(issues),
            Err(e) => {
                web_sys::console::error_1(&format!("[Admin] {}", e).into());
                AdminState::Failed(e)
            }
        };
        let _ = set_state.try_set(next);
    });

    view! {
        <div class="admin-page">
            <div class="admin-head">
                <h1>"🔧 Admin Panel"</h1>
                <button class="header-link" on:click=move |_| ctx.navigate(Route::Guide)>
                    "← Back to Guide"
                </button>
            </div>
            {move || match state.get() {
                AdminState::Loading => view! { <p class="muted">"Loading contributions..."</p> }.into_any(),
                AdminState::Failed(error) => view! {
                    <div class="admin-error">
                        <strong>"Error: "</strong>{error}
                        <p>
                            "Make sure you've created "<code>"admin.config.json"</code>
                            " in the configuration folder with your GitHub token. See SETUP.md"
                        </p>
                    </div>
                }.into_any(),
                AdminState::Loaded(issues) if issues.is_empty() => view! {
                    <p class="muted">"No pending contributions. Great work!"</p>
                }.into_any(),
                AdminState::Loaded(issues) => issues
                    .into_iter()
                    .map(|issue| view! { <ContributionCard issue=issue /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
