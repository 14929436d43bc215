//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling bearer
//! token authentication, request building, and mapping of error responses to
//! [`SyncError`] kinds.

use ferry_core::SyncError;
use reqwest::{Client, RequestBuilder, Response, StatusCode, header};
use tracing::warn;

use crate::consts::{ACCEPT, SERVICE, USER_AGENT};
use crate::models::GitHubAuth;

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
  /// Create a new GitHub client against an API root, either the public API
  /// or a GitHub Enterprise Server instance
  pub fn with_base_url(base_url: &str, auth: GitHubAuth) -> Self {
    Self {
      client: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// The API root requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Start an authenticated GET request with the standard GitHub headers
  pub(crate) fn get(&self, url: &str) -> RequestBuilder {
    self
      .client
      .get(url)
      .header(header::ACCEPT, ACCEPT)
      .header(header::USER_AGENT, USER_AGENT)
      .bearer_auth(&self.auth.token)
  }
}

/// Create a GitHub client from a token and API root
pub fn create_github_client(token: &str, base_url: &str) -> GitHubClient {
  let auth = GitHubAuth {
    token: token.to_string(),
  };

  GitHubClient::with_base_url(base_url, auth)
}

/// Convert a non-success response into an error, consuming the body.
///
/// `resource` names what was requested and is only used for 404s.
pub(crate) async fn response_error(response: Response, resource: String) -> anyhow::Error {
  let status = response.status();
  match status {
    StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
      warn!("Authentication failed when accessing GitHub API");
      SyncError::Auth { service: SERVICE }.into()
    }
    StatusCode::NOT_FOUND => SyncError::NotFound(resource).into(),
    _ => {
      let body = response.text().await.unwrap_or_default();
      warn!("Unexpected GitHub API error: HTTP {} - {}", status, body);
      SyncError::Api {
        service: SERVICE,
        status: status.as_u16(),
        body,
      }
      .into()
    }
  }
}
