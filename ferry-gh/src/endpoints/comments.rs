//! GitHub issue comment endpoints.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, info, instrument, trace};

use crate::client::{GitHubClient, response_error};
use crate::consts::PER_PAGE;
use crate::models::GitHubComment;

impl GitHubClient {
  /// List every comment on an issue, oldest first.
  ///
  /// Pages through the listing until GitHub returns a short page, so long
  /// threads are never truncated.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_issue_comments(&self, owner: &str, repo: &str, issue_number: u64) -> Result<Vec<GitHubComment>> {
    let url = format!("{}/repos/{}/{}/issues/{}/comments", self.base_url, owner, repo, issue_number);
    let per_page = PER_PAGE.to_string();

    let mut comments = Vec::new();
    let mut page = 1u32;

    loop {
      trace!("GitHub API URL: {} (page {})", url, page);

      let response = self
        .get(&url)
        .query(&[("per_page", per_page.as_str()), ("page", page.to_string().as_str())])
        .send()
        .await
        .context(format!("GET {url} failed"))?;

      let status = response.status();
      debug!("GitHub API response status: {}", status);

      let batch = match status {
        StatusCode::OK => response
          .json::<Vec<GitHubComment>>()
          .await
          .context("Failed to parse GitHub comments response")?,
        _ => return Err(response_error(response, format!("Issue #{issue_number} for {owner}/{repo}")).await),
      };

      let count = batch.len();
      comments.extend(batch);

      if count < PER_PAGE {
        break;
      }
      page += 1;
    }

    info!("Fetched {} comments for issue #{}", comments.len(), issue_number);
    Ok(comments)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::{Value, json};
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_github_client;
  use crate::consts::PER_PAGE;

  fn comment(id: u64, login: &str) -> Value {
    json!({
      "id": id,
      "body": format!("comment {id}"),
      "user": { "login": login, "id": 1 }
    })
  }

  #[tokio::test]
  async fn test_list_issue_comments_single_page() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token", &mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/repos/owner/repo/issues/5/comments"))
      .and(query_param("per_page", "100"))
      .and(query_param("page", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([comment(1, "alice"), comment(2, "bob")])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let comments = client.list_issue_comments("owner", "repo", 5).await?;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].user.login, "alice");
    assert_eq!(comments[1].body.as_deref(), Some("comment 2"));

    Ok(())
  }

  #[tokio::test]
  async fn test_list_issue_comments_pages_to_completion() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token", &mock_server.uri());

    let first_page: Vec<Value> = (1..=PER_PAGE as u64).map(|id| comment(id, "alice")).collect();
    let second_page = vec![comment(PER_PAGE as u64 + 1, "bob")];

    Mock::given(method("GET"))
      .and(path("/repos/owner/repo/issues/5/comments"))
      .and(query_param("page", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(first_page))
      .expect(1)
      .mount(&mock_server)
      .await;
    Mock::given(method("GET"))
      .and(path("/repos/owner/repo/issues/5/comments"))
      .and(query_param("page", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(second_page))
      .expect(1)
      .mount(&mock_server)
      .await;

    let comments = client.list_issue_comments("owner", "repo", 5).await?;
    assert_eq!(comments.len(), PER_PAGE + 1);
    assert_eq!(comments[0].id, 1);
    assert_eq!(comments[PER_PAGE].user.login, "bob");

    Ok(())
  }

  #[tokio::test]
  async fn test_list_issue_comments_server_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token", &mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/repos/owner/repo/issues/5/comments"))
      .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
      .mount(&mock_server)
      .await;

    let err = client.list_issue_comments("owner", "repo", 5).await.unwrap_err();
    assert!(err.to_string().contains("HTTP 500"));
    assert!(err.to_string().contains("boom"));

    Ok(())
  }
}
