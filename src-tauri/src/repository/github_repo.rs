//! GitHub Contribution Source
//!
//! Lists open issues labeled `contribution` for the admin view. One request
//! per call, no pagination and no retries.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::AdminConfig;
use crate::domain::{ContributionIssue, DomainError, DomainResult};
use super::traits::ContributionSource;

pub const CONTRIBUTION_LABEL: &str = "contribution";

const SERVICE: &str = "GitHub";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const USER_AGENT: &str = concat!("command-guide/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GithubIssue {
    id: u64,
    number: u64,
    title: String,
    #[serde(default)]
    body: Option<String>,
    user: GithubUser,
    html_url: String,
    /// Present when the "issue" is really a pull request
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

impl From<GithubIssue> for ContributionIssue {
    fn from(issue: GithubIssue) -> Self {
        ContributionIssue {
            id: issue.id,
            number: issue.number,
            title: issue.title,
            body: issue.body,
            author: issue.user.login,
            url: issue.html_url,
        }
    }
}

pub struct GithubContributionSource {
    client: reqwest::Client,
    api_base_url: String,
    owner: String,
    repo: String,
    token: String,
}

impl GithubContributionSource {
    pub fn new(config: &AdminConfig) -> DomainResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Internal(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_base_url: config.api_base_url().to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
            token: config.github_token.clone(),
        })
    }

    fn issues_url(&self) -> String {
        format!("{}/repos/{}/{}/issues", self.api_base_url, self.owner, self.repo)
    }
}

#[async_trait]
impl ContributionSource for GithubContributionSource {
    async fn list_open(&self) -> DomainResult<Vec<ContributionIssue>> {
        let response = self
            .client
            .get(self.issues_url())
            .query(&[("labels", CONTRIBUTION_LABEL), ("state", "open")])
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("{} issues request for {}/{} failed: {}", SERVICE, self.owner, self.repo, status);
            return Err(DomainError::remote(SERVICE, status.as_u16()));
        }

        let issues: Vec<GithubIssue> = response.json().await?;
        Ok(issues
            .into_iter()
            .filter(|issue| issue.pull_request.is_none())
            .map(ContributionIssue::from)
            .collect())
    }
}
