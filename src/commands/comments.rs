//! Comment Commands
//!
//! Frontend bindings for the comment overlay. Lists are never fetched
//! directly; they arrive through `comments-updated` events.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{Comment, CommentsStatus};
use super::{call, to_args};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct SectionArgs<'a> {
    #[serde(rename = "sectionId")]
    section_id: &'a str,
}

#[derive(Serialize)]
struct SubscriptionArgs {
    #[serde(rename = "subscriptionId")]
    subscription_id: u64,
}

#[derive(Serialize)]
struct SubmitArgs<'a> {
    #[serde(rename = "sectionId")]
    section_id: &'a str,
    author: &'a str,
    text: &'a str,
}

#[derive(Serialize)]
struct VoteArgs<'a> {
    #[serde(rename = "sectionId")]
    section_id: &'a str,
    #[serde(rename = "commentId")]
    comment_id: &'a str,
    delta: i64,
}

// ========================
// Commands
// ========================

pub async fn comments_status() -> Result<CommentsStatus, String> {
    call("comments_status", JsValue::NULL).await
}

/// Returns the subscription id; the first list follows as an event
pub async fn subscribe_comments(section_id: &str) -> Result<u64, String> {
    call("subscribe_comments", to_args(&SectionArgs { section_id })?).await
}

pub async fn unsubscribe_comments(subscription_id: u64) -> Result<bool, String> {
    call("unsubscribe_comments", to_args(&SubscriptionArgs { subscription_id })?).await
}

/// `Ok(None)` when the backend ignored blank text
pub async fn submit_comment(section_id: &str, author: &str, text: &str) -> Result<Option<Comment>, String> {
    let js_args = to_args(&SubmitArgs { section_id, author, text })?;
    call("submit_comment", js_args).await
}

pub async fn vote_comment(section_id: &str, comment_id: &str, delta: i64) -> Result<(), String> {
    let js_args = to_args(&VoteArgs { section_id, comment_id, delta })?;
    call("vote_comment", js_args).await
}
