//! # Issue Sync
//!
//! The fetch-then-reconcile pipeline. [`github`] reads a snapshot of the
//! source issue and [`jira`] applies it to the tracker; both work through
//! traits so the pipeline can be driven by in-memory fakes.

pub mod github;
pub mod jira;

use anyhow::Result;
use ferry_core::Config;
use ferry_gh::create_github_client;
use ferry_jira::create_jira_client;
use tracing::info;

pub use self::github::{GithubIssueSnapshot, IssueSource, fetch_snapshot};
pub use self::jira::{IssueTracker, JiraIssueDraft, Outcome, reconcile};

/// Mirror the configured GitHub issue into Jira using the real API clients
pub async fn run(config: &Config) -> Result<Outcome> {
  let github = create_github_client(&config.github.token, &config.github.api_url);
  let jira = create_jira_client(&config.jira.url, &config.jira.user, &config.jira.password);

  sync_issue(&github, &jira, config).await
}

/// Fetch the issue from `source` and reconcile it into `tracker`
pub async fn sync_issue<S, T>(source: &S, tracker: &T, config: &Config) -> Result<Outcome>
where
  S: IssueSource + ?Sized,
  T: IssueTracker + ?Sized,
{
  info!(
    "Syncing {}/{}#{} into Jira project {}",
    config.github.owner, config.github.repo, config.github.issue_number, config.jira.project
  );

  let snapshot = fetch_snapshot(source, &config.github).await?;
  reconcile(tracker, &config.jira, &snapshot).await
}
