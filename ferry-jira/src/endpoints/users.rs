//! # Jira User Endpoints

use anyhow::{Context, Result};
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument};

use crate::client::{JiraClient, response_error};
use crate::models::JiraUser;

impl JiraClient {
  /// Search for users whose name, display name, or email matches `query`
  ///
  /// The query is URL-escaped by the request builder.
  #[instrument(skip(self), level = "debug")]
  pub async fn find_users(&self, query: &str) -> Result<Vec<JiraUser>> {
    let response = self
      .request(Method::GET, "user/search")
      .query(&[("query", query)])
      .send()
      .await
      .context("Failed to search Jira users")?;

    debug!("Jira API response status: {}", response.status());

    match response.status() {
      StatusCode::OK => response
        .json::<Vec<JiraUser>>()
        .await
        .context("Failed to parse Jira user search results"),
      _ => Err(
        response_error(response, format!("Jira user search for '{query}'"))
          .await
          .context(format!("Failed to find user '{query}'")),
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use ferry_core::SyncError;
  use wiremock::matchers::{basic_auth, method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_jira_client;

  #[tokio::test]
  async fn test_find_users_escapes_query() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/user/search"))
      .and(query_param("query", "Zoë O'Brien & co"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
          { "accountId": "a-1", "displayName": "Zoë O'Brien & co" },
          { "accountId": "a-2", "displayName": "Zoë O'Brien (old)" }
      ])))
      .expect(1)
      .mount(&mock_server)
      .await;

    let users = client.find_users("Zoë O'Brien & co").await?;
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].account_id.as_deref(), Some("a-1"));
    assert_eq!(users[1].display_name, "Zoë O'Brien (old)");

    Ok(())
  }

  #[tokio::test]
  async fn test_find_users_error_keeps_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_jira_client(&mock_server.uri(), "test_user", "test_token");

    Mock::given(method("GET"))
      .and(path("/rest/api/2/user/search"))
      .respond_with(ResponseTemplate::new(400).set_body_string("The query parameter is invalid"))
      .mount(&mock_server)
      .await;

    let err = client.find_users("Alice").await.unwrap_err();
    assert!(matches!(err.downcast_ref::<SyncError>(), Some(SyncError::Api { status: 400, .. })));
    let chain = format!("{err:#}");
    assert!(chain.contains("Failed to find user 'Alice'"));
    assert!(chain.contains("The query parameter is invalid"));

    Ok(())
  }
}
