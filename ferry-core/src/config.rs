//! # Configuration
//!
//! Loads the GitHub and Jira settings for a single run from the process
//! environment. Every input may be given either under its bare name or with
//! the `INPUT_` prefix that GitHub Actions uses for `with:` inputs.

use std::fmt;

use tracing::debug;

use crate::error::SyncError;
use crate::url::normalize_base_url;

/// Prefix GitHub Actions adds to action inputs.
pub const INPUT_PREFIX: &str = "INPUT_";

pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const ENV_GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_GITHUB_ISSUE_NUMBER: &str = "GITHUB_ISSUE_NUMBER";
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";
pub const ENV_JIRA_URL: &str = "JIRA_URL";
pub const ENV_JIRA_USEREMAIL: &str = "JIRA_USEREMAIL";
pub const ENV_JIRA_APITOKEN: &str = "JIRA_APITOKEN";
pub const ENV_JIRA_PROJECTKEY: &str = "JIRA_PROJECTKEY";

/// Base URL for the official SaaS GitHub API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Settings for reading the source issue from GitHub.
#[derive(Clone, PartialEq, Eq)]
pub struct GithubConfig {
  pub token: String,
  pub owner: String,
  pub repo: String,
  pub issue_number: u64,
  pub api_url: String,
}

/// Settings for writing the mirrored issue to Jira.
#[derive(Clone, PartialEq, Eq)]
pub struct JiraConfig {
  pub url: String,
  pub user: String,
  pub password: String,
  pub project: String,
}

/// Complete configuration for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
  pub github: GithubConfig,
  pub jira: JiraConfig,
}

impl fmt::Debug for GithubConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GithubConfig")
      .field("token", &"<redacted>")
      .field("owner", &self.owner)
      .field("repo", &self.repo)
      .field("issue_number", &self.issue_number)
      .field("api_url", &self.api_url)
      .finish()
  }
}

impl fmt::Debug for JiraConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("JiraConfig")
      .field("url", &self.url)
      .field("user", &self.user)
      .field("password", &"<redacted>")
      .field("project", &self.project)
      .finish()
  }
}

impl Config {
  /// Load the configuration from the process environment.
  pub fn from_env() -> Result<Self, SyncError> {
    Self::from_lookup(|name| std::env::var(name).ok())
  }

  /// Load the configuration through an arbitrary variable lookup.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, SyncError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let github = GithubConfig::from_lookup(&lookup)?;
    let jira = JiraConfig::from_lookup(&lookup)?;
    Ok(Self { github, jira })
  }
}

impl GithubConfig {
  fn from_lookup<F>(lookup: &F) -> Result<Self, SyncError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let repository = required(lookup, ENV_GITHUB_REPOSITORY)?;
    let (owner, repo) = parse_repository(&repository)?;

    let issue_number = parse_issue_number(&required(lookup, ENV_GITHUB_ISSUE_NUMBER)?)?;

    let api_url = match input(lookup, ENV_GITHUB_API_URL) {
      Some(url) => normalize_base_url(&url)?,
      None => DEFAULT_GITHUB_API_URL.to_string(),
    };

    Ok(Self {
      token: required(lookup, ENV_GITHUB_TOKEN)?,
      owner,
      repo,
      issue_number,
      api_url,
    })
  }
}

impl JiraConfig {
  fn from_lookup<F>(lookup: &F) -> Result<Self, SyncError>
  where
    F: Fn(&str) -> Option<String>,
  {
    Ok(Self {
      url: normalize_base_url(&required(lookup, ENV_JIRA_URL)?)?,
      user: required(lookup, ENV_JIRA_USEREMAIL)?,
      password: required(lookup, ENV_JIRA_APITOKEN)?,
      project: required(lookup, ENV_JIRA_PROJECTKEY)?,
    })
  }
}

/// Resolve a single input, preferring `INPUT_<name>` over `<name>`.
///
/// Values are trimmed and an empty value is treated as unset.
pub fn input<F>(lookup: &F, name: &str) -> Option<String>
where
  F: Fn(&str) -> Option<String>,
{
  let prefixed = format!("{INPUT_PREFIX}{name}");
  [prefixed.as_str(), name].into_iter().find_map(|key| {
    let value = lookup(key)?;
    let value = value.trim();
    if value.is_empty() {
      None
    } else {
      debug!("Read input {} from {}", name, key);
      Some(value.to_string())
    }
  })
}

fn required<F>(lookup: &F, name: &str) -> Result<String, SyncError>
where
  F: Fn(&str) -> Option<String>,
{
  input(lookup, name).ok_or_else(|| SyncError::Config(name.to_string()))
}

/// Split an `owner/repo` string on the first `/`.
///
/// Anything after the first separator belongs to the repository part, so
/// `"a/b/c"` yields `("a", "b/c")`.
pub fn parse_repository(value: &str) -> Result<(String, String), SyncError> {
  match value.split_once('/') {
    Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => Ok((owner.to_string(), repo.to_string())),
    _ => Err(SyncError::Validation(format!(
      "Invalid repository '{value}'. Expected the form 'owner/repo'."
    ))),
  }
}

/// Parse a GitHub issue number.
pub fn parse_issue_number(value: &str) -> Result<u64, SyncError> {
  match value.parse::<u64>() {
    Ok(number) if number > 0 => Ok(number),
    _ => Err(SyncError::Validation(format!(
      "Invalid issue number '{value}'. Expected a positive integer."
    ))),
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use ferry_test_utils::EnvVarGuard;

  use super::*;

  fn full_env() -> HashMap<String, String> {
    [
      (ENV_GITHUB_TOKEN, "gh-token"),
      (ENV_GITHUB_REPOSITORY, "octo/widgets"),
      (ENV_GITHUB_ISSUE_NUMBER, "42"),
      (ENV_JIRA_URL, "company.atlassian.net/"),
      (ENV_JIRA_USEREMAIL, "bot@example.com"),
      (ENV_JIRA_APITOKEN, "jira-token"),
      (ENV_JIRA_PROJECTKEY, "ENG"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
  }

  fn load(env: &HashMap<String, String>) -> Result<Config, SyncError> {
    Config::from_lookup(|name| env.get(name).cloned())
  }

  #[test]
  fn test_load_full_config() {
    let config = load(&full_env()).unwrap();

    assert_eq!(config.github.token, "gh-token");
    assert_eq!(config.github.owner, "octo");
    assert_eq!(config.github.repo, "widgets");
    assert_eq!(config.github.issue_number, 42);
    assert_eq!(config.github.api_url, DEFAULT_GITHUB_API_URL);
    assert_eq!(config.jira.url, "https://company.atlassian.net");
    assert_eq!(config.jira.user, "bot@example.com");
    assert_eq!(config.jira.password, "jira-token");
    assert_eq!(config.jira.project, "ENG");
  }

  #[test]
  fn test_input_prefix_is_accepted_and_preferred() {
    let mut env = full_env();
    env.remove(ENV_JIRA_PROJECTKEY);
    env.insert("INPUT_JIRA_PROJECTKEY".to_string(), "OPS".to_string());
    env.insert("INPUT_GITHUB_ISSUE_NUMBER".to_string(), "7".to_string());

    let config = load(&env).unwrap();
    assert_eq!(config.jira.project, "OPS");
    assert_eq!(config.github.issue_number, 7);
  }

  #[test]
  fn test_empty_input_counts_as_missing() {
    let mut env = full_env();
    env.insert(ENV_JIRA_APITOKEN.to_string(), "  ".to_string());

    let err = load(&env).unwrap_err();
    assert!(matches!(err, SyncError::Config(ref name) if name == ENV_JIRA_APITOKEN));
  }

  #[test]
  fn test_missing_issue_number() {
    let mut env = full_env();
    env.remove(ENV_GITHUB_ISSUE_NUMBER);

    let err = load(&env).unwrap_err();
    assert!(matches!(err, SyncError::Config(ref name) if name == ENV_GITHUB_ISSUE_NUMBER));
  }

  #[test]
  fn test_non_numeric_issue_number() {
    let mut env = full_env();
    env.insert(ENV_GITHUB_ISSUE_NUMBER.to_string(), "12abc".to_string());

    let err = load(&env).unwrap_err();
    assert!(matches!(err, SyncError::Validation(_)));
    assert!(err.to_string().contains("12abc"));
  }

  #[test]
  fn test_custom_github_api_url() {
    let mut env = full_env();
    env.insert(ENV_GITHUB_API_URL.to_string(), "https://ghe.example.com/api/v3/".to_string());

    let config = load(&env).unwrap();
    assert_eq!(config.github.api_url, "https://ghe.example.com/api/v3");
  }

  #[test]
  fn test_parse_repository() {
    assert_eq!(
      parse_repository("owner/repo").unwrap(),
      ("owner".to_string(), "repo".to_string())
    );
    assert_eq!(parse_repository("a/b/c").unwrap(), ("a".to_string(), "b/c".to_string()));
  }

  #[test]
  fn test_parse_repository_invalid() {
    for value in ["", "owner", "/repo", "owner/"] {
      let err = parse_repository(value).unwrap_err();
      assert!(matches!(err, SyncError::Validation(_)), "expected rejection of {value:?}");
    }
  }

  #[test]
  fn test_parse_issue_number() {
    assert_eq!(parse_issue_number("1").unwrap(), 1);
    assert!(parse_issue_number("0").is_err());
    assert!(parse_issue_number("-3").is_err());
    assert!(parse_issue_number("").is_err());
  }

  #[test]
  fn test_debug_redacts_secrets() {
    let config = load(&full_env()).unwrap();
    let debug = format!("{config:?}");

    assert!(!debug.contains("gh-token"));
    assert!(!debug.contains("jira-token"));
    assert!(debug.contains("<redacted>"));
    assert!(debug.contains("octo"));
  }

  #[test]
  fn test_from_env() {
    let names = [
      ENV_GITHUB_TOKEN,
      ENV_GITHUB_REPOSITORY,
      ENV_GITHUB_ISSUE_NUMBER,
      ENV_GITHUB_API_URL,
      ENV_JIRA_URL,
      ENV_JIRA_USEREMAIL,
      ENV_JIRA_APITOKEN,
      ENV_JIRA_PROJECTKEY,
    ];
    let guards: Vec<EnvVarGuard> = names
      .iter()
      .flat_map(|name| [EnvVarGuard::new(name), EnvVarGuard::new(&format!("{INPUT_PREFIX}{name}"))])
      .collect();
    for guard in &guards {
      guard.remove();
    }

    for (name, value) in full_env() {
      if let Some(guard) = guards.iter().find(|g| g.name() == format!("{INPUT_PREFIX}{name}")) {
        guard.set(&value);
      }
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.github.owner, "octo");
    assert_eq!(config.jira.project, "ENG");
  }
}
