//! Header Bar Component
//!
//! Guide title, feedback link, admin entry and the theme toggle.

use leptos::prelude::*;

use crate::components::ExternalLink;
use crate::context::use_app_context;
use crate::route::Route;
use crate::store::{use_guide_store, GuideStateStoreFields};

/// Issue form link for a template in the guide repository
pub fn issue_form_url(repo_url: &str, template: &str, title: Option<&str>) -> String {
    let mut url = format!("{}/issues/new?template={}", repo_url.trim_end_matches('/'), template);
    if let Some(title) = title {
        let encoded = percent_encoding::utf8_percent_encode(title, percent_encoding::NON_ALPHANUMERIC);
        url.push_str(&format!("&title={}", encoded));
    }
    url
}

#[component]
pub fn HeaderBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_guide_store();

    let feedback_url = move || {
        store
            .info()
            .get()
            .repo_url
            .map(|repo| issue_form_url(&repo, "feedback.yml", None))
    };

    view! {
        <header class="header-bar">
            <div class="brand">
                <div class="brand-mark">"◈"</div>
                <div>
                    <div class="brand-title">{move || store.info().get().title}</div>
                    <div class="brand-subtitle">{move || store.info().get().subtitle}</div>
                </div>
            </div>
            <div class="header-actions">
                {move || feedback_url().map(|url| view! {
                    <ExternalLink href=url class="header-link">"💬 Feedback"</ExternalLink>
                })}
                <button class="header-link" on:click=move |_| ctx.navigate(Route::Admin)>
                    "⚙️ Admin"
                </button>
                <button
                    class="theme-toggle"
                    title=move || if ctx.dark_mode.get() { "Light mode" } else { "Dark mode" }
                    on:click=move |_| ctx.toggle_dark_mode()
                >
                    {move || if ctx.dark_mode.get() { "☀" } else { "☾" }}
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_form_url() {
        assert_eq!(
            issue_form_url("https://github.com/me/guide/", "feedback.yml", None),
            "https://github.com/me/guide/issues/new?template=feedback.yml"
        );
        assert_eq!(
            issue_form_url("https://github.com/me/guide", "contribution.yml", Some("Git & more")),
            "https://github.com/me/guide/issues/new?template=contribution.yml&title=Git%20%26%20more"
        );
    }
}
