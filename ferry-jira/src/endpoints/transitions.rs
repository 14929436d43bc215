//! # Jira Transition Endpoints

use anyhow::{Context, Result};
use ferry_core::SyncError;
use reqwest::{Method, StatusCode};
use tracing::{debug, info, instrument};

use crate::client::{JiraClient, response_error};
use crate::consts::SERVICE;
use crate::models::{JiraTransition, JiraTransitions, TransitionId, TransitionRequest};

impl JiraClient {
  /// Get available transitions for an issue
  #[instrument(skip(self), level = "debug")]
  pub async fn get_transitions(&self, issue_key: &str) -> Result<Vec<JiraTransition>> {
    let response = self
      .request(Method::GET, &format!("issue/{issue_key}/transitions"))
      .send()
      .await
      .context("Failed to fetch Jira transitions")?;

    debug!("Jira API response status: {}", response.status());

    match response.status() {
      StatusCode::OK => {
        let transitions = response
          .json::<JiraTransitions>()
          .await
          .context("Failed to parse Jira transitions")?;
        Ok(transitions.transitions)
      }
      _ => Err(response_error(response, format!("Issue {issue_key}")).await),
    }
  }

  /// Transition an issue to a new status
  #[instrument(skip(self), level = "debug")]
  pub async fn transition_issue(&self, issue_key: &str, transition_id: &str) -> Result<()> {
    let payload = TransitionRequest {
      transition: TransitionId {
        id: transition_id.to_string(),
      },
    };

    let response = self
      .request(Method::POST, &format!("issue/{issue_key}/transitions"))
      .json(&payload)
      .send()
      .await
      .context("Failed to transition Jira issue")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => {
        info!("Applied transition {} to {}", transition_id, issue_key);
        Ok(())
      }
      StatusCode::BAD_REQUEST => {
        let body = response.text().await.unwrap_or_default();
        Err(
          anyhow::Error::new(SyncError::Api {
            service: SERVICE,
            status: StatusCode::BAD_REQUEST.as_u16(),
            body,
          })
          .context("Invalid transition. The transition may not be available for the current status."),
        )
      }
      _ => Err(response_error(response, format!("Issue {issue_key}")).await),
    }
  }
}
