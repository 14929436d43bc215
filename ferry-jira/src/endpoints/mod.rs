//! # Jira API Endpoints
//!
//! Organized endpoint implementations for different Jira API resource types,
//! including projects, users, issue search, issues, comments, and transition
//! management functionality.

pub mod comments;
pub mod issues;
pub mod projects;
pub mod search;
pub mod transitions;
pub mod users;
