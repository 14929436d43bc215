use serde::{Deserialize, Serialize};

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

/// Represents a Jira project
#[derive(Debug, Clone, Deserialize)]
pub struct JiraProject {
  pub id: String,
  pub key: String,
  pub name: String,
}

/// Represents a Jira user account
///
/// Jira Cloud identifies users by `accountId`; Server and Data Center by
/// `name`. Either may be absent depending on the deployment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  #[serde(default)]
  pub account_id: Option<String>,
  #[serde(default)]
  pub name: Option<String>,
  pub display_name: String,
}

/// Represents a Jira issue
#[derive(Debug, Deserialize)]
pub struct JiraIssue {
  pub id: String,
  pub key: String,
  #[serde(default)]
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields
///
/// Only the fields that were requested come back, so all are optional.
#[derive(Debug, Default, Deserialize)]
pub struct JiraIssueFields {
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub comment: Option<JiraCommentPage>,
}

/// Represents the results of a JQL search
#[derive(Debug, Deserialize)]
pub struct JiraSearchResults {
  pub issues: Vec<JiraIssue>,
}

/// Represents a Jira comment
#[derive(Debug, Clone, Deserialize)]
pub struct JiraComment {
  pub id: String,
  #[serde(default)]
  pub body: Option<String>,
}

/// Represents one page of comments, either embedded in an issue or returned
/// by the comment listing endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraCommentPage {
  #[serde(default)]
  pub comments: Vec<JiraComment>,
  #[serde(default)]
  pub start_at: usize,
  #[serde(default)]
  pub total: usize,
}

/// Represents a new comment payload
#[derive(Debug, Serialize)]
pub struct NewComment {
  pub body: String,
}

/// Represents a Jira transition
#[derive(Debug, Clone, Deserialize)]
pub struct JiraTransition {
  pub id: String,
  pub name: String,
}

/// Represents a list of Jira transitions
#[derive(Debug, Deserialize)]
pub struct JiraTransitions {
  pub transitions: Vec<JiraTransition>,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}

/// Represents a create or update payload for an issue
#[derive(Debug, Serialize)]
pub struct IssuePayload {
  pub fields: IssueFieldsPayload,
}

/// Represents the writable fields of an issue
///
/// `project` and `issue_type` are only sent on creation. Empty labels and a
/// missing assignee are left out so an update does not clear them.
#[derive(Debug, Default, Serialize)]
pub struct IssueFieldsPayload {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project: Option<ProjectRef>,
  #[serde(rename = "issuetype", skip_serializing_if = "Option::is_none")]
  pub issue_type: Option<IssueTypeRef>,
  pub summary: String,
  pub description: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub labels: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<UserRef>,
}

/// Represents a project reference by key
#[derive(Debug, Serialize)]
pub struct ProjectRef {
  pub key: String,
}

/// Represents an issue type reference by name
#[derive(Debug, Serialize)]
pub struct IssueTypeRef {
  pub name: String,
}

/// Represents a user reference in a write payload
#[derive(Debug, Serialize)]
pub struct UserRef {
  #[serde(rename = "accountId", skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

impl From<&JiraUser> for UserRef {
  fn from(user: &JiraUser) -> Self {
    Self {
      account_id: user.account_id.clone(),
      name: user.name.clone(),
    }
  }
}

/// Represents the response to an issue creation
#[derive(Debug, Deserialize)]
pub struct CreatedIssue {
  pub id: String,
  pub key: String,
}
