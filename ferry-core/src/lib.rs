//! # Ferry Core
//!
//! Shared building blocks for the ferry workspace: configuration loading from
//! the CI environment, the error kinds reported by every stage of a sync, and
//! URL normalisation helpers.

pub mod config;
pub mod error;
pub mod url;

pub use config::{Config, GithubConfig, JiraConfig};
pub use error::SyncError;
