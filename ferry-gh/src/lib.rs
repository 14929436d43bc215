//! # GitHub API Client
//!
//! Provides the slice of the GitHub REST API that ferry reads from: a single
//! issue, its comment thread, and the public profiles of the people involved.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod models;

// Re-export the client
pub use client::{GitHubClient, create_github_client};
// Re-export models
pub use models::{GitHubAuth, GitHubComment, GitHubIssue, GitHubUser};
