//! GitHub Issues API endpoint implementations.

use anyhow::{Context, Result};
use tracing::{debug, info, instrument, trace};

use crate::client::{GitHubClient, response_error};
use crate::models::GitHubIssue;

impl GitHubClient {
  /// Get a specific issue by number.
  ///
  /// # Errors
  ///
  /// Returns an error if the issue is not found, authentication fails,
  /// the request cannot be sent, or the response cannot be parsed.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, owner: &str, repo: &str, issue_number: u64) -> Result<GitHubIssue> {
    info!("Fetching issue #{} for {}/{}", issue_number, owner, repo);

    let url = format!("{}/repos/{}/{}/issues/{}", self.base_url, owner, repo, issue_number);

    trace!("GitHub API URL: {}", url);

    let response = self.get(&url).send().await.context(format!("GET {url} failed"))?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    match status {
      reqwest::StatusCode::OK => {
        let issue = response
          .json::<GitHubIssue>()
          .await
          .context("Failed to parse GitHub issue response")?;
        trace!("Issue: {:?}", issue);
        Ok(issue)
      }
      _ => Err(response_error(response, format!("Issue #{issue_number} for {owner}/{repo}")).await),
    }
  }
}
