//! # Jira Reconciler
//!
//! Applies a [`GithubIssueSnapshot`] to a Jira project: resolves people,
//! looks up the mirrored issue by summary, then either creates it or replaces
//! its comments, moves its workflow state, and updates its fields.

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Result;
use async_trait::async_trait;
use ferry_core::JiraConfig;
use ferry_jira::{
  IssueFieldsPayload, IssueTypeRef, JiraClient, JiraComment, JiraIssue, JiraProject, JiraTransition, JiraUser,
  ProjectRef, UserRef,
};
use tracing::{debug, info, warn};

use super::github::GithubIssueSnapshot;

/// GitHub state that maps to the Jira "done" transition
pub const CLOSED_STATE: &str = "closed";

/// Issue type used for every mirrored issue
pub const ISSUE_TYPE: &str = "Task";

const DONE_TRANSITION: &str = "done";
const PROGRESS_TRANSITION: &str = "progress";

/// Characters that force a JQL value to be quoted
const JQL_RESERVED: &[char] = &[
  '.', ',', ';', '?', '|', '*', '/', '%', '^', '$', '#', '@', '[', ']', '+', '\'', '"', '\\', '(', ')', '=', '!',
  '<', '>', '~', '{', '}', '&',
];

/// Write access to the Jira project that mirrors GitHub issues
#[async_trait]
pub trait IssueTracker: Send + Sync {
  async fn project(&self, key: &str) -> Result<JiraProject>;

  async fn find_users(&self, query: &str) -> Result<Vec<JiraUser>>;

  async fn search_issues(&self, jql: &str) -> Result<Vec<JiraIssue>>;

  async fn issue_comments(&self, issue_key: &str) -> Result<Vec<JiraComment>>;

  async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<()>;

  async fn add_comment(&self, issue_key: &str, body: &str) -> Result<()>;

  async fn transitions(&self, issue_key: &str) -> Result<Vec<JiraTransition>>;

  async fn transition(&self, issue_key: &str, transition_id: &str) -> Result<()>;

  /// Create an issue and return its key
  async fn create_issue(&self, fields: IssueFieldsPayload) -> Result<String>;

  async fn update_issue(&self, issue_key: &str, fields: IssueFieldsPayload) -> Result<()>;
}

#[async_trait]
impl IssueTracker for JiraClient {
  async fn project(&self, key: &str) -> Result<JiraProject> {
    JiraClient::get_project(self, key).await
  }

  async fn find_users(&self, query: &str) -> Result<Vec<JiraUser>> {
    JiraClient::find_users(self, query).await
  }

  async fn search_issues(&self, jql: &str) -> Result<Vec<JiraIssue>> {
    JiraClient::search_issues(self, jql).await
  }

  async fn issue_comments(&self, issue_key: &str) -> Result<Vec<JiraComment>> {
    JiraClient::get_issue_comments(self, issue_key).await
  }

  async fn delete_comment(&self, issue_key: &str, comment_id: &str) -> Result<()> {
    JiraClient::delete_comment(self, issue_key, comment_id).await
  }

  async fn add_comment(&self, issue_key: &str, body: &str) -> Result<()> {
    JiraClient::add_comment(self, issue_key, body).await.map(|_| ())
  }

  async fn transitions(&self, issue_key: &str) -> Result<Vec<JiraTransition>> {
    JiraClient::get_transitions(self, issue_key).await
  }

  async fn transition(&self, issue_key: &str, transition_id: &str) -> Result<()> {
    JiraClient::transition_issue(self, issue_key, transition_id).await
  }

  async fn create_issue(&self, fields: IssueFieldsPayload) -> Result<String> {
    JiraClient::create_issue(self, fields).await.map(|created| created.key)
  }

  async fn update_issue(&self, issue_key: &str, fields: IssueFieldsPayload) -> Result<()> {
    JiraClient::update_issue(self, issue_key, fields).await
  }
}

/// The issue as it should look in Jira
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraIssueDraft {
  /// Key of the matched issue, `None` when the issue will be created
  pub key: Option<String>,
  pub project: String,
  pub labels: Vec<String>,
  pub issue_type: String,
  pub summary: String,
  pub description: String,
  pub assignee: Option<JiraUser>,
}

impl JiraIssueDraft {
  /// Build the draft for `snapshot` using the resolved Jira users
  pub fn from_snapshot(
    snapshot: &GithubIssueSnapshot,
    project: &str,
    key: Option<String>,
    users: &BTreeMap<String, JiraUser>,
  ) -> Self {
    let issue = &snapshot.issue;
    let labels = if issue.state.is_empty() {
      Vec::new()
    } else {
      vec![issue.state.clone()]
    };
    let assignee = issue
      .assignee
      .as_ref()
      .and_then(|assignee| users.get(&assignee.login))
      .cloned();

    Self {
      key,
      project: project.to_string(),
      labels,
      issue_type: ISSUE_TYPE.to_string(),
      summary: issue.title.clone(),
      description: format!(
        "{}\n{}\n{}",
        issue.user.login,
        issue.html_url,
        issue.body.as_deref().unwrap_or_default()
      ),
      assignee,
    }
  }

  /// Fields for a new issue
  pub fn create_fields(&self) -> IssueFieldsPayload {
    IssueFieldsPayload {
      project: Some(ProjectRef {
        key: self.project.clone(),
      }),
      issue_type: Some(IssueTypeRef {
        name: self.issue_type.clone(),
      }),
      ..self.update_fields()
    }
  }

  /// Fields for an existing issue; project and issue type are left alone
  pub fn update_fields(&self) -> IssueFieldsPayload {
    IssueFieldsPayload {
      project: None,
      issue_type: None,
      summary: self.summary.clone(),
      description: self.description.clone(),
      labels: self.labels.clone(),
      assignee: self.assignee.as_ref().map(UserRef::from),
    }
  }
}

/// Result of a reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Created {
    key: String,
  },
  Updated {
    key: String,
    comments_deleted: usize,
    comments_added: usize,
    /// Name of the transition applied, if any
    transition: Option<String>,
  },
}

impl fmt::Display for Outcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Created { key } => write!(f, "Created Jira issue {key}"),
      Self::Updated {
        key,
        comments_deleted,
        comments_added,
        transition,
      } => {
        write!(
          f,
          "Updated Jira issue {key} (replaced {comments_deleted} comments with {comments_added}"
        )?;
        match transition {
          Some(name) => write!(f, ", transitioned to '{name}')"),
          None => write!(f, ", no transition)"),
        }
      }
    }
  }
}

/// Whether a Jira display name is an acceptable match for a GitHub one
///
/// Case-insensitive substring containment, nothing fuzzier.
pub fn display_name_matches(jira_name: &str, github_name: &str) -> bool {
  jira_name.to_lowercase().contains(&github_name.to_lowercase())
}

/// Replace dashes with spaces so the title survives JQL text search
pub fn normalize_title(title: &str) -> String {
  title.replace('-', " ")
}

fn escape_jql(value: &str) -> String {
  value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Query for issues in `project_name` whose summary contains `title`
pub fn build_jql(project_name: &str, title: &str) -> String {
  let needs_quotes = project_name.is_empty()
    || project_name
      .chars()
      .any(|c| c.is_whitespace() || JQL_RESERVED.contains(&c));
  let project = if needs_quotes {
    format!("\"{}\"", escape_jql(project_name))
  } else {
    project_name.to_string()
  };

  format!(
    "project = {} AND summary ~ \"{}\"",
    project,
    escape_jql(&normalize_title(title))
  )
}

/// Pick the transition that follows the GitHub `state`
///
/// `closed` looks for a transition named like "done", anything else for
/// "progress". An empty state selects nothing.
pub fn select_transition<'a>(state: &str, transitions: &'a [JiraTransition]) -> Option<&'a JiraTransition> {
  if state.is_empty() {
    return None;
  }
  let wanted = if state == CLOSED_STATE {
    DONE_TRANSITION
  } else {
    PROGRESS_TRANSITION
  };

  transitions
    .iter()
    .find(|transition| transition.name.to_lowercase().contains(wanted))
}

/// Jira comment body replaying a GitHub comment
pub fn comment_body(snapshot: &GithubIssueSnapshot, login: &str, body: &str) -> String {
  let author = snapshot.display_name(login).unwrap_or(login);
  format!("{author}\n{body}")
}

/// Map each GitHub login in the snapshot to a Jira user
///
/// Logins without an acceptable candidate are left out.
pub async fn resolve_users<T>(tracker: &T, snapshot: &GithubIssueSnapshot) -> Result<BTreeMap<String, JiraUser>>
where
  T: IssueTracker + ?Sized,
{
  let mut resolved = BTreeMap::new();

  for (login, display_name) in &snapshot.name_by_login {
    let candidates = tracker.find_users(display_name).await?;
    match candidates
      .into_iter()
      .find(|candidate| display_name_matches(&candidate.display_name, display_name))
    {
      Some(user) => {
        debug!("Matched GitHub user {} to Jira user {}", login, user.display_name);
        resolved.insert(login.clone(), user);
      }
      None => debug!("No Jira user matches {} ({})", login, display_name),
    }
  }

  Ok(resolved)
}

/// Create or update the Jira issue mirroring `snapshot`
pub async fn reconcile<T>(tracker: &T, config: &JiraConfig, snapshot: &GithubIssueSnapshot) -> Result<Outcome>
where
  T: IssueTracker + ?Sized,
{
  let project = tracker.project(&config.project).await?;
  debug!("Resolved Jira project {} ({})", project.key, project.name);

  let users = resolve_users(tracker, snapshot).await?;
  if let Some(assignee) = &snapshot.issue.assignee
    && !users.contains_key(&assignee.login)
  {
    warn!("GitHub assignee {} has no Jira account, leaving assignee unset", assignee.login);
  }

  let jql = build_jql(&project.name, &snapshot.issue.title);
  let existing = tracker.search_issues(&jql).await?.into_iter().next();

  let key = existing.map(|issue| issue.key);
  let draft = JiraIssueDraft::from_snapshot(snapshot, &config.project, key, &users);

  match &draft.key {
    Some(key) => update_existing(tracker, snapshot, &draft, key).await,
    None => {
      let key = tracker.create_issue(draft.create_fields()).await?;
      info!("Created Jira issue {}", key);
      Ok(Outcome::Created { key })
    }
  }
}

async fn update_existing<T>(
  tracker: &T,
  snapshot: &GithubIssueSnapshot,
  draft: &JiraIssueDraft,
  key: &str,
) -> Result<Outcome>
where
  T: IssueTracker + ?Sized,
{
  info!("Found existing Jira issue {}", key);

  let existing_comments = tracker.issue_comments(key).await?;
  for comment in &existing_comments {
    tracker.delete_comment(key, &comment.id).await?;
  }

  for comment in &snapshot.comments {
    let body = comment_body(snapshot, &comment.user.login, comment.body.as_deref().unwrap_or_default());
    tracker.add_comment(key, &body).await?;
  }
  debug!(
    "Replaced {} comments on {} with {}",
    existing_comments.len(),
    key,
    snapshot.comments.len()
  );

  let transition = if snapshot.issue.state.is_empty() {
    debug!("GitHub issue has no state, leaving {} where it is", key);
    None
  } else {
    let transitions = tracker.transitions(key).await?;
    match select_transition(&snapshot.issue.state, &transitions) {
      Some(transition) => {
        tracker.transition(key, &transition.id).await?;
        info!("Transitioned {} to '{}'", key, transition.name);
        Some(transition.name.clone())
      }
      None => {
        warn!("No transition matches GitHub state '{}' on {}", snapshot.issue.state, key);
        None
      }
    }
  };

  tracker.update_issue(key, draft.update_fields()).await?;

  Ok(Outcome::Updated {
    key: key.to_string(),
    comments_deleted: existing_comments.len(),
    comments_added: snapshot.comments.len(),
    transition,
  })
}
