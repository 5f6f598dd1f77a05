//! Domain Layer
//!
//! Guide content, community comments and contribution issues, plus the
//! error vocabulary shared by every layer.

mod entity;
mod section;
mod comment;
mod contribution;

pub use entity::{Entity, DomainError, DomainResult};
pub use section::{Entry, EntryKind, Section};
pub use comment::{display_order, sort_for_display, Comment, NewComment, Vote, ANONYMOUS};
pub use contribution::ContributionIssue;
