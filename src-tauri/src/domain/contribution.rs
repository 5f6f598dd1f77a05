//! Contribution Issue
//!
//! Read-only mirror of an issue filed with the `contribution` label.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionIssue {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    /// Login of the user who filed the issue
    pub author: String,
    /// Browser URL of the issue
    pub url: String,
}

impl Entity for ContributionIssue {
    type Id = u64;

    fn id(&self) -> Self::Id {
        self.id
    }
}
