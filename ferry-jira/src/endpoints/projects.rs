use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::client::{JiraClient, response_error};
use crate::models::JiraProject;

impl JiraClient {
  /// Get a Jira project by key
  #[instrument(skip(self), level = "debug")]
  pub async fn get_project(&self, project_key: &str) -> Result<JiraProject> {
    let response = self
      .request(Method::GET, &format!("project/{project_key}"))
      .send()
      .await
      .context("Failed to fetch Jira project")?;

    debug!("Jira API response status: {}", response.status());

    match response.status() {
      StatusCode::OK => response
        .json::<JiraProject>()
        .await
        .context("Failed to parse Jira project"),
      _ => Err(response_error(response, format!("Jira project {project_key}")).await),
    }
  }
}
