//! Contribution Review
//!
//! Read-only proxy for the admin view. Approval happens by hand outside the
//! app, so there is nothing to write back.

use std::sync::Arc;

use crate::config::AdminConfig;
use crate::domain::{ContributionIssue, DomainError, DomainResult};
use crate::repository::{ContributionSource, GithubContributionSource};

pub const ADMIN_CONFIG_MISSING: &str = "Admin config not found. See SETUP.md";

pub struct ContributionReview {
    source: Option<Arc<dyn ContributionSource>>,
}

impl ContributionReview {
    pub fn from_config(config: Option<&AdminConfig>) -> Self {
        let source = config.and_then(|config| match GithubContributionSource::new(config) {
            Ok(source) => Some(Arc::new(source) as Arc<dyn ContributionSource>),
            Err(e) => {
                log::error!("Issue tracker client unavailable: {}", e);
                None
            }
        });
        Self { source }
    }

    pub fn with_source(source: Arc<dyn ContributionSource>) -> Self {
        Self { source: Some(source) }
    }

    pub fn is_configured(&self) -> bool {
        self.source.is_some()
    }

    /// One request per call; failures are reported, never retried.
    pub async fn fetch_open(&self) -> DomainResult<Vec<ContributionIssue>> {
        let source = self
            .source
            .as_ref()
            .ok_or_else(|| DomainError::NotConfigured(ADMIN_CONFIG_MISSING.to_string()))?;
        let issues = source.list_open().await?;
        log::info!("Fetched {} open contributions", issues.len());
        Ok(issues)
    }
}
