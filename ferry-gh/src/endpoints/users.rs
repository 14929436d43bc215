use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::{debug, instrument};

use crate::client::{GitHubClient, response_error};
use crate::models::GitHubUser;

impl GitHubClient {
  /// Get the public profile of a user by login
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user(&self, login: &str) -> Result<GitHubUser> {
    let url = format!("{}/users/{}", self.base_url, login);

    let response = self.get(&url).send().await.context("Failed to fetch GitHub user")?;

    let status = response.status();
    debug!("GitHub API response status: {}", status);

    match status {
      StatusCode::OK => {
        // First get the response body as text
        let body = response.text().await.context("Failed to read response body")?;

        // Then try to parse it as JSON
        match serde_json::from_str::<GitHubUser>(&body) {
          Ok(user) => Ok(user),
          Err(e) => {
            // Try to extract the error message from the response
            if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(&body)
              && let Some(message) = error_json.get("message").and_then(|m| m.as_str())
            {
              return Err(anyhow::anyhow!(
                "Failed to parse GitHub user {}: GitHub API error: {}",
                login,
                message
              ));
            }
            Err(anyhow::anyhow!("Failed to parse GitHub user {}: {}", login, e))
          }
        }
      }
      _ => Err(response_error(response, format!("GitHub user {login}")).await),
    }
  }
}

#[cfg(test)]
mod tests {
  use ferry_core::SyncError;
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::create_github_client;

  #[tokio::test]
  async fn test_get_user() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token", &mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/users/octocat"))
      .and(header("Authorization", "Bearer test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "login": "octocat",
          "id": 1,
          "name": "The Octocat",
          "email": "octocat@github.com",
          "avatar_url": "https://github.com/images/error/octocat_happy.gif",
          "html_url": "https://github.com/octocat"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let user = client.get_user("octocat").await?;
    assert_eq!(user.login, "octocat");
    assert_eq!(user.id, 1);
    assert_eq!(user.name, Some("The Octocat".to_string()));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_user_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token", &mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/users/ghost"))
      .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
          "message": "Not Found"
      })))
      .mount(&mock_server)
      .await;

    let err = client.get_user("ghost").await.unwrap_err();
    assert!(matches!(err.downcast_ref::<SyncError>(), Some(SyncError::NotFound(_))));
    assert_eq!(err.to_string(), "GitHub user ghost not found");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_user_malformed_body() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client("test_token", &mock_server.uri());

    Mock::given(method("GET"))
      .and(path("/users/octocat"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "message": "API rate limit exceeded"
      })))
      .mount(&mock_server)
      .await;

    let err = client.get_user("octocat").await.unwrap_err();
    assert!(err.to_string().contains("API rate limit exceeded"));

    Ok(())
  }
}
