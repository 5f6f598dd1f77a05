//! Tauri Commands for Section Comments
//!
//! Subscriptions push `comments-updated` events to the webview until the
//! frontend releases them.

use std::sync::Arc;

use tauri::{AppHandle, Emitter, State};
use crate::domain::{Comment, DomainError, Vote};
use crate::service::{CommentsStatus, CommentsUpdate, SubscriptionId, UpdateSink};
use crate::AppState;

/// Event carrying a [`CommentsUpdate`]
pub const COMMENTS_EVENT: &str = "comments-updated";

/// Whether the comment overlay is available in this run
#[tauri::command]
pub async fn comments_status(state: State<'_, AppState>) -> Result<CommentsStatus, String> {
    Ok(state.comments.status())
}

/// Start watching a section; the current list is pushed right away
#[tauri::command]
pub async fn subscribe_comments(
    app: AppHandle,
    state: State<'_, AppState>,
    section_id: String,
) -> Result<SubscriptionId, String> {
    state.content.require_section(&section_id).map_err(|e| e.to_string())?;
    let sink: UpdateSink = Arc::new(move |update: CommentsUpdate| {
        if let Err(e) = app.emit(COMMENTS_EVENT, &update) {
            log::warn!("Failed to emit {}: {}", COMMENTS_EVENT, e);
        }
    });
    state
        .comments
        .subscribe(&section_id, sink)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn unsubscribe_comments(
    state: State<'_, AppState>,
    subscription_id: SubscriptionId,
) -> Result<bool, String> {
    Ok(state.comments.unsubscribe(subscription_id).await)
}

/// Post a comment. Blank text is ignored and yields `null`.
#[tauri::command]
pub async fn submit_comment(
    state: State<'_, AppState>,
    section_id: String,
    author: Option<String>,
    text: String,
) -> Result<Option<Comment>, String> {
    state.content.require_section(&section_id).map_err(|e| e.to_string())?;
    state
        .comments
        .submit(&section_id, author.as_deref().unwrap_or_default(), &text)
        .await
        .map_err(|e| e.to_string())
}

/// Add `delta` (+1 or -1) to a comment's vote counter
#[tauri::command]
pub async fn vote_comment(
    state: State<'_, AppState>,
    section_id: String,
    comment_id: String,
    delta: i64,
) -> Result<(), String> {
    let vote = Vote::from_delta(delta)
        .ok_or_else(|| DomainError::InvalidInput(format!("vote delta must be +1 or -1, got {}", delta)))
        .map_err(|e| e.to_string())?;
    state.content.require_section(&section_id).map_err(|e| e.to_string())?;
    state
        .comments
        .vote(&section_id, &comment_id, vote)
        .await
        .map_err(|e| e.to_string())
}
