//! Repository Layer - Core Traits
//!
//! Abstract access to the two remote services. The comment store is
//! append-and-increment only: nothing here deletes or overwrites.

use async_trait::async_trait;
use crate::domain::{Comment, ContributionIssue, DomainResult, NewComment};

/// Storage for section comments
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// All comments of one section, in display order
    async fn list_by_section(&self, section_id: &str) -> DomainResult<Vec<Comment>>;

    /// Insert a new comment with zero votes
    async fn create(&self, comment: &NewComment) -> DomainResult<Comment>;

    /// Atomically add `delta` to the vote counter of an existing comment
    async fn increment_votes(&self, comment_id: &str, delta: i64) -> DomainResult<()>;
}

/// Read-only source of contribution requests
#[async_trait]
pub trait ContributionSource: Send + Sync {
    /// Open issues carrying the contribution label
    async fn list_open(&self) -> DomainResult<Vec<ContributionIssue>>;
}
