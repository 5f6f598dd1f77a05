//! Service Layer
//!
//! Stateful coordination on top of the repositories: live comment feeds and
//! the contribution review proxy.

mod comment_hub;
mod contribution_review;

pub use comment_hub::{
    CommentsHub, CommentsStatus, CommentsUpdate, SubscriptionId, UpdateSink, COMMENTS_DISABLED,
};
pub use contribution_review::{ContributionReview, ADMIN_CONFIG_MISSING};
