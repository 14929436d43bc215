//! # Jira Comment Endpoints

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::client::{JiraClient, response_error};
use crate::consts::PAGE_SIZE;
use crate::models::{JiraComment, JiraCommentPage, NewComment};

impl JiraClient {
  /// Get every comment on an issue, oldest first
  ///
  /// Reads the comments embedded in the issue itself and, when Jira reports
  /// more than it embedded, pages through the comment listing for the rest.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_comments(&self, issue_key: &str) -> Result<Vec<JiraComment>> {
    let issue = self.get_issue(issue_key, "comment").await?;
    let Some(page) = issue.fields.comment else {
      return Ok(Vec::new());
    };

    let total = page.total;
    let mut comments = page.comments;

    while comments.len() < total {
      let next = self.list_comments(issue_key, comments.len()).await?;
      if next.comments.is_empty() {
        break;
      }
      comments.extend(next.comments);
    }

    debug!("Issue {} has {} comments", issue_key, comments.len());
    Ok(comments)
  }

  /// Fetch one page of the comment listing starting at `start_at`
  async fn list_comments(&self, issue_key: &str, start_at: usize) -> Result<JiraCommentPage> {
    let response = self
      .request(Method::GET, &format!("issue/{issue_key}/comment"))
      .query(&[("startAt", start_at), ("maxResults", PAGE_SIZE)])
      .send()
      .await
      .context("Failed to fetch Jira comments")?;

    match response.status() {
      StatusCode::OK => response
        .json::<JiraCommentPage>()
        .await
        .context("Failed to parse Jira comments"),
      _ => Err(response_error(response, format!("Issue {issue_key}")).await),
    }
  }

  /// Add a comment to an issue
  #[instrument(skip(self, body), level = "debug")]
  pub async fn add_comment(&self, issue_key: &str, body: &str) -> Result<JiraComment> {
    let payload = NewComment { body: body.to_string() };

    let response = self
      .request(Method::POST, &format!("issue/{issue_key}/comment"))
      .json(&payload)
      .send()
      .await
      .context("Failed to add Jira comment")?;

    match response.status() {
      StatusCode::CREATED | StatusCode::OK => response
        .json::<JiraComment>()
        .await
        .context("Failed to parse Jira comment"),
      _ => Err(
        response_error(response, format!("Issue {issue_key}"))
          .await
          .context(format!("Failed to add comment to {issue_key}")),
      ),
    }
  }

  /// Delete a comment from an issue
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<()> {
    let response = self
      .request(Method::DELETE, &format!("issue/{issue_key}/comment/{comment_id}"))
      .send()
      .await
      .context("Failed to delete Jira comment")?;

    match response.status() {
      StatusCode::NO_CONTENT | StatusCode::OK => Ok(()),
      _ => Err(
        response_error(response, format!("Comment {comment_id} on {issue_key}"))
          .await
          .context(format!("Failed to delete comment {comment_id} from {issue_key}")),
      ),
    }
  }
}
