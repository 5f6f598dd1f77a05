//! Repository Layer
//!
//! Data access abstractions and their remote implementations.

mod traits;
mod firestore;
mod github_repo;

#[cfg(test)]
mod memory_repo;


pub use traits::{CommentRepository, ContributionSource};
pub use firestore::{FirestoreCommentRepository, COMMENTS_COLLECTION};
pub use github_repo::{GithubContributionSource, CONTRIBUTION_LABEL};

#[cfg(test)]
pub use memory_repo::InMemoryCommentRepository;
