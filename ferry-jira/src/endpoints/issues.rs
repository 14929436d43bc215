//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations,
//! including fetching, creating, and updating Jira issues.

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use tracing::{debug, info, instrument, trace};

use crate::client::{JiraClient, response_error};
use crate::models::{CreatedIssue, IssueFieldsPayload, IssuePayload, JiraIssue};

impl JiraClient {
  /// Get a Jira issue by id or key, limited to the given fields
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, issue_key: &str, fields: &str) -> Result<JiraIssue> {
    let response = self
      .request(Method::GET, &format!("issue/{issue_key}"))
      .query(&[("fields", fields)])
      .send()
      .await
      .context("Failed to fetch Jira issue")?;

    debug!("Jira API response status: {}", response.status());

    match response.status() {
      StatusCode::OK => {
        let issue = response
          .json::<JiraIssue>()
          .await
          .context("Failed to parse Jira issue")?;
        Ok(issue)
      }
      _ => Err(response_error(response, format!("Issue {issue_key}")).await),
    }
  }

  /// Create a new issue
  #[instrument(skip(self, fields), level = "debug")]
  pub async fn create_issue(&self, fields: IssueFieldsPayload) -> Result<CreatedIssue> {
    let payload = IssuePayload { fields };
    trace!("Create payload: {:?}", payload);

    let response = self
      .request(Method::POST, "issue")
      .json(&payload)
      .send()
      .await
      .context("Failed to create Jira issue")?;

    debug!("Jira API response status: {}", response.status());

    match response.status() {
      StatusCode::CREATED | StatusCode::OK => {
        let created = response
          .json::<CreatedIssue>()
          .await
          .context("Failed to parse Jira issue creation response")?;
        info!("Created Jira issue {}", created.key);
        Ok(created)
      }
      _ => Err(
        response_error(response, "Jira issue endpoint".to_string())
          .await
          .context("Failed to create Jira issue"),
      ),
    }
  }

  /// Update the fields of an existing issue
  #[instrument(skip(self, fields), level = "debug")]
  pub async fn update_issue(&self, issue_key: &str, fields: IssueFieldsPayload) -> Result<()> {
    let payload = IssuePayload { fields };
    trace!("Update payload: {:?}", payload);

    let response = self
      .request(Method::PUT, &format!("issue/{issue_key}"))
      .json(&payload)
      .send()
      .await
      .context("Failed to update Jira issue")?;

    debug!("Jira API response status: {}", response.status());

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => {
        info!("Updated Jira issue {}", issue_key);
        Ok(())
      }
      _ => Err(
        response_error(response, format!("Issue {issue_key}"))
          .await
          .context(format!("Failed to update Jira issue {issue_key}")),
      ),
    }
  }
}
