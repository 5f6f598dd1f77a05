//! Contribution Card Component

use leptos::prelude::*;

use crate::components::ExternalLink;
use crate::context::use_app_context;
use crate::markdown::render_issue_body;
use crate::models::ContributionIssue;

const APPROVE_INSTRUCTIONS: &str = "To approve: copy the issue details into guide.json in the \
    configuration folder (or src-tauri/data/guide.json for the bundled copy), then close the \
    issue on GitHub.";

#[component]
pub fn ContributionCard(issue: ContributionIssue) -> impl IntoView {
    let ctx = use_app_context();
    let (show_instructions, set_show_instructions) = signal(false);
    let body = StoredValue::new(issue.body.clone());
    let body_html = move || body.with_value(|b| render_issue_body(b.as_deref(), ctx.dark_mode.get()));

    view! {
        <div class="contribution-card">
            <h3>{issue.title.clone()}</h3>
            <div class="contribution-meta">{format!("By {} · #{}", issue.author, issue.number)}</div>
            <div class="issue-body" inner_html=body_html></div>
            <div class="contribution-actions">
                <ExternalLink href=issue.url.clone() class="primary-btn">"View on GitHub"</ExternalLink>
                <button class="secondary-btn" on:click=move |_| set_show_instructions.update(|s| *s = !*s)>
                    "Approve & Add"
                </button>
            </div>
            <Show when=move || show_instructions.get()>
                <p class="approve-instructions">{APPROVE_INSTRUCTIONS}</p>
            </Show>
        </div>
    }
}
