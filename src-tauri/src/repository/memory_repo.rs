//! In-Memory Comment Repository
//!
//! Test double for the comment store. Counts every call so tests can prove
//! how much traffic a code path produced.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{sort_for_display, Comment, DomainError, DomainResult, Entity, NewComment};
use super::traits::CommentRepository;

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<Vec<Comment>>,
    next_id: AtomicU64,
    calls: AtomicUsize,
    fail_reads: AtomicBool,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        Self {
            comments: Mutex::new(comments),
            ..Self::default()
        }
    }

    /// Number of repository calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make subsequent reads fail with a network error
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub async fn votes_of(&self, comment_id: &str) -> Option<i64> {
        self.comments
            .lock()
            .await
            .iter()
            .find(|c| c.id() == comment_id)
            .map(|c| c.votes)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list_by_section(&self, section_id: &str) -> DomainResult<Vec<Comment>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::Network("simulated outage".to_string()));
        }
        let mut comments: Vec<Comment> = self
            .comments
            .lock()
            .await
            .iter()
            .filter(|c| c.section_id == section_id)
            .cloned()
            .collect();
        sort_for_display(&mut comments);
        Ok(comments)
    }

    async fn create(&self, comment: &NewComment) -> DomainResult<Comment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let id = format!("mem-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let stored = comment.clone().into_comment(id);
        self.comments.lock().await.push(stored.clone());
        Ok(stored)
    }

    async fn increment_votes(&self, comment_id: &str, delta: i64) -> DomainResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut comments = self.comments.lock().await;
        let comment = comments
            .iter_mut()
            .find(|c| c.id() == comment_id)
            .ok_or_else(|| DomainError::NotFound(format!("comment {}", comment_id)))?;
        comment.votes += delta;
        Ok(())
    }
}
