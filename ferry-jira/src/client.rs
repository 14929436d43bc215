use ferry_core::SyncError;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, header};
use tracing::warn;

use crate::consts::{SERVICE, USER_AGENT};
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// The Jira instance requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Start a basic-auth request against a REST v2 path
  pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
    self
      .client
      .request(method, format!("{}/rest/api/2/{}", self.base_url, path))
      .header(header::USER_AGENT, USER_AGENT)
      .header(header::ACCEPT, "application/json")
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> JiraClient {
  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  JiraClient::new(base_url, auth)
}

/// Convert a non-success response into an error, consuming the body.
///
/// `resource` names what was requested and is only used for 404s.
pub(crate) async fn response_error(response: Response, resource: String) -> anyhow::Error {
  let status = response.status();
  match status {
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
      warn!("Authentication failed when accessing Jira API");
      SyncError::Auth { service: SERVICE }.into()
    }
    StatusCode::NOT_FOUND => SyncError::NotFound(resource).into(),
    _ => {
      let body = response.text().await.unwrap_or_default();
      warn!("Unexpected Jira API error: HTTP {} - {}", status, body);
      SyncError::Api {
        service: SERVICE,
        status: status.as_u16(),
        body,
      }
      .into()
    }
  }
}
