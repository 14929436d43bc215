//! # Jira API Client
//!
//! Provides Jira REST API integration for the operations ferry needs to
//! mirror a GitHub issue: project lookup, user search, JQL search, issue
//! creation and updates, comments, and workflow transitions.

mod client;
pub mod consts;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export models
pub use models::{
  CreatedIssue, IssueFieldsPayload, IssuePayload, IssueTypeRef, JiraAuth, JiraComment, JiraCommentPage, JiraIssue,
  JiraIssueFields, JiraProject, JiraTransition, JiraTransitions, JiraUser, NewComment, ProjectRef,
  TransitionId, TransitionRequest, UserRef,
};
