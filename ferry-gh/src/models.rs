use serde::Deserialize;

/// Represents GitHub authentication credentials
#[derive(Clone)]
pub struct GitHubAuth {
  pub token: String,
}

/// Represents a GitHub user
///
/// Users embedded in issues and comments only carry `login` and `id`; `name`
/// is filled in by the full profile from `GET /users/{login}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
  pub login: String,
  pub id: u64,
  #[serde(default)]
  pub name: Option<String>,
}

impl GitHubUser {
  /// The profile name, or the login when the profile has no public name
  pub fn display_name(&self) -> &str {
    match self.name.as_deref().map(str::trim) {
      Some(name) if !name.is_empty() => name,
      _ => &self.login,
    }
  }
}

/// Represents a GitHub issue
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubIssue {
  pub id: u64,
  pub number: u64,
  pub title: String,
  #[serde(default)]
  pub body: Option<String>,
  pub html_url: String,
  pub state: String,
  pub user: GitHubUser,
  #[serde(default)]
  pub assignee: Option<GitHubUser>,
}

/// Represents a comment on a GitHub issue
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubComment {
  pub id: u64,
  #[serde(default)]
  pub body: Option<String>,
  pub user: GitHubUser,
}
