//! # GitHub Issue Fetcher
//!
//! Reads the issue, its full comment thread, and the display name of every
//! participant into a [`GithubIssueSnapshot`].

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use ferry_core::GithubConfig;
use ferry_gh::{GitHubClient, GitHubComment, GitHubIssue, GitHubUser};
use tracing::{debug, info};

/// Read access to a GitHub issue and the people on it
#[async_trait]
pub trait IssueSource: Send + Sync {
  async fn issue(&self, owner: &str, repo: &str, number: u64) -> Result<GitHubIssue>;

  async fn user(&self, login: &str) -> Result<GitHubUser>;

  /// All comments on the issue, oldest first
  async fn comments(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<GitHubComment>>;
}

#[async_trait]
impl IssueSource for GitHubClient {
  async fn issue(&self, owner: &str, repo: &str, number: u64) -> Result<GitHubIssue> {
    GitHubClient::get_issue(self, owner, repo, number).await
  }

  async fn user(&self, login: &str) -> Result<GitHubUser> {
    GitHubClient::get_user(self, login).await
  }

  async fn comments(&self, owner: &str, repo: &str, number: u64) -> Result<Vec<GitHubComment>> {
    GitHubClient::list_issue_comments(self, owner, repo, number).await
  }
}

/// Everything the reconciler needs from GitHub, fetched once per run
#[derive(Debug, Clone)]
pub struct GithubIssueSnapshot {
  pub issue: GitHubIssue,
  pub comments: Vec<GitHubComment>,
  /// Display name for every login that appears on the issue
  pub name_by_login: BTreeMap<String, String>,
}

impl GithubIssueSnapshot {
  /// Display name recorded for `login`, if it was resolved
  pub fn display_name(&self, login: &str) -> Option<&str> {
    self.name_by_login.get(login).map(String::as_str)
  }
}

/// Fetch the configured issue, its comments, and participant names
///
/// The author, the assignee, and every comment author are looked up exactly
/// once each. Any failure aborts the fetch.
pub async fn fetch_snapshot<S>(source: &S, config: &GithubConfig) -> Result<GithubIssueSnapshot>
where
  S: IssueSource + ?Sized,
{
  let (owner, repo, number) = (config.owner.as_str(), config.repo.as_str(), config.issue_number);

  let issue = source.issue(owner, repo, number).await?;
  info!("Fetched GitHub issue #{}: {}", issue.number, issue.title);

  let mut name_by_login = BTreeMap::new();
  let author = source.user(&issue.user.login).await?;
  name_by_login.insert(author.login.clone(), author.display_name().to_string());

  let comments = source.comments(owner, repo, number).await?;
  debug!("Fetched {} comments", comments.len());

  let participants = issue
    .assignee
    .iter()
    .chain(comments.iter().map(|comment| &comment.user))
    .map(|user| user.login.as_str());

  for login in participants {
    if name_by_login.contains_key(login) {
      continue;
    }
    let user = source.user(login).await?;
    debug!("Resolved GitHub user {} as {}", login, user.display_name());
    name_by_login.insert(login.to_string(), user.display_name().to_string());
  }

  Ok(GithubIssueSnapshot {
    issue,
    comments,
    name_by_login,
  })
}
