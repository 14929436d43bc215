//! # GitHub API Endpoints
//!
//! Organized endpoint implementations for the GitHub API resource types ferry
//! reads: issues, issue comments, and users.

pub mod comments;
pub mod issues;
pub mod users;
