//! Comments Panel Component
//!
//! Live comment list for one section. Subscribes when mounted and releases
//! the subscription on cleanup, even if the subscribe call is still in
//! flight at that point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::{Comment, CommentState, CommentsStatus};

const DISABLED_NOTICE: &str = "💬 Comments disabled. Configure Firebase to enable. See SETUP.md";

fn log_error(msg: String) {
    web_sys::console::error_1(&format!("[Comments] {}", msg).into());
}

#[component]
pub fn CommentsPanel(#[prop(into)] section_id: String) -> impl IntoView {
    let ctx = use_app_context();
    let section = StoredValue::new(section_id);
    let subscription = RwSignal::new(None::<u64>);
    let failure = RwSignal::new(None::<String>);
    let alive = Arc::new(AtomicBool::new(true));
    let started = StoredValue::new(false);

    // Subscribe once the backend reported comments as enabled
    let alive_for_subscribe = alive.clone();
    Effect::new(move |_| {
        if ctx.comments_status.get() != Some(CommentsStatus::Enabled) || started.get_value() {
            return;
        }
        started.set_value(true);
        let alive = alive_for_subscribe.clone();
        let section_id = section.get_value();
        spawn_local(async move {
            match commands::subscribe_comments(&section_id).await {
                Ok(id) if alive.load(Ordering::SeqCst) => subscription.set(Some(id)),
                Ok(id) => {
                    // Panel went away while subscribing
                    let _ = commands::unsubscribe_comments(id).await;
                    ctx.forget_feed(id);
                }
                Err(e) => {
                    log_error(format!("Subscribe to '{}' failed: {}", section_id, e));
                    if alive.load(Ordering::SeqCst) {
                        failure.set(Some(e));
                    }
                }
            }
        });
    });

    on_cleanup(move || {
        alive.store(false, Ordering::SeqCst);
        if let Some(Some(id)) = subscription.try_get_untracked() {
            ctx.forget_feed(id);
            spawn_local(async move {
                if let Err(e) = commands::unsubscribe_comments(id).await {
                    log_error(format!("Unsubscribe {} failed: {}", id, e));
                }
            });
        }
    });

    let state = Memo::new(move |_| {
        let feed = subscription
            .get()
            .and_then(|id| ctx.comment_feeds.with(|feeds| feeds.get(&id).cloned()));
        CommentState::resolve(ctx.comments_status.get(), failure.get(), feed)
    });
    let disabled = move || ctx.comments_status.get() == Some(CommentsStatus::Disabled);

    view! {
        <Show
            when=move || !disabled()
            fallback=|| view! { <div class="comments-notice">{DISABLED_NOTICE}</div> }
        >
            <div class="comments-panel">
                <h3>{move || format!("💬 Comments ({})", state.get().count())}</h3>
                <CommentForm section=section />
                {move || match state.get() {
                    CommentState::Ready(comments) => comments
                        .into_iter()
                        .map(|comment| view! { <CommentRow section=section comment=comment /> })
                        .collect_view()
                        .into_any(),
                    CommentState::Failed(reason) => view! {
                        <p class="comments-error">{format!("Comments unavailable: {}", reason)}</p>
                    }
                    .into_any(),
                    _ => view! { <p class="muted">"Loading comments..."</p> }.into_any(),
                }}
            </div>
        </Show>
    }
}

/// Inputs are cleared only after a successful post
#[component]
fn CommentForm(section: StoredValue<String>) -> impl IntoView {
    let (author, set_author) = signal(String::new());
    let (text, set_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let author_value = author.get_untracked();
        let text_value = text.get_untracked();
        if text_value.trim().is_empty() {
            return;
        }
        let section_id = section.get_value();
        spawn_local(async move {
            match commands::submit_comment(&section_id, &author_value, &text_value).await {
                Ok(_) => {
                    let _ = set_author.try_set(String::new());
                    let _ = set_text.try_set(String::new());
                }
                Err(e) => log_error(format!("Error adding comment: {}", e)),
            }
        });
    };

    view! {
        <form class="comment-form" on:submit=submit>
            <input
                type="text"
                placeholder="Your name (optional)"
                prop:value=move || author.get()
                on:input=move |ev| set_author.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Add a comment or tip..."
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="primary-btn">"Post Comment"</button>
        </form>
    }
}

#[component]
fn CommentRow(section: StoredValue<String>, comment: Comment) -> impl IntoView {
    let comment_id = StoredValue::new(comment.id.clone());

    let vote = move |delta: i64| {
        let section_id = section.get_value();
        let id = comment_id.get_value();
        spawn_local(async move {
            if let Err(e) = commands::vote_comment(&section_id, &id, delta).await {
                log_error(format!("Error voting: {}", e));
            }
        });
    };

    view! {
        <div class="comment">
            <div class="comment-head">
                <strong>{comment.author}</strong>
                <div class="vote-box">
                    <button class="vote-btn" on:click=move |_| vote(1)>"▲"</button>
                    <span class="vote-count">{comment.votes}</span>
                    <button class="vote-btn" on:click=move |_| vote(-1)>"▼"</button>
                </div>
            </div>
            <p class="comment-text">{comment.text}</p>
        </div>
    }
}
