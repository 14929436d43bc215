//! # Jira Search Endpoints
//!
//! JQL issue search via the enhanced `search/jql` endpoint.

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument, trace};

use crate::client::{JiraClient, response_error};
use crate::models::{JiraIssue, JiraSearchResults};

impl JiraClient {
  /// Search issues with a JQL query, returning the first page of matches
  /// with their summaries
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues(&self, jql: &str) -> Result<Vec<JiraIssue>> {
    trace!("JQL: {}", jql);

    let response = self
      .request(Method::GET, "search/jql")
      .query(&[("jql", jql), ("fields", "summary")])
      .send()
      .await
      .context("Failed to search Jira issues")?;

    debug!("Jira API response status: {}", response.status());

    match response.status() {
      StatusCode::OK => {
        let results = response
          .json::<JiraSearchResults>()
          .await
          .context("Failed to parse Jira search results")?;
        Ok(results.issues)
      }
      _ => Err(
        response_error(response, "Jira search".to_string())
          .await
          .context(format!("JQL search failed: {jql}")),
      ),
    }
  }
}
