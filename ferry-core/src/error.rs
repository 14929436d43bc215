//! # Sync Errors
//!
//! Structured error kinds for a ferry run. Client and pipeline code returns
//! `anyhow::Result` and wraps these values, so callers can recover the kind
//! with `downcast_ref::<SyncError>()` while still getting a full context chain.

use thiserror::Error;

/// Errors that can occur while loading configuration or talking to GitHub and
/// Jira.
#[derive(Debug, Error)]
pub enum SyncError {
  /// A required input is absent from the environment.
  #[error("Missing required input '{0}'. Set '{0}' or 'INPUT_{0}' in the environment.")]
  Config(String),

  /// An input is present but malformed.
  #[error("{0}")]
  Validation(String),

  /// Credentials were rejected by the remote service.
  #[error("Authentication failed. Please check your {service} credentials.")]
  Auth { service: &'static str },

  /// The requested resource does not exist or is not visible to the caller.
  #[error("{0} not found")]
  NotFound(String),

  /// Any other non-success response. The body is kept for diagnostics.
  #[error("Unexpected {service} API error: HTTP {status} - {body}")]
  Api {
    service: &'static str,
    status: u16,
    body: String,
  },
}
