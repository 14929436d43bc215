//! URL helpers shared across crates.
//!
//! Base URLs come from CI inputs, which are often written without a scheme or
//! with a trailing slash. Both clients build request URLs with
//! `format!("{base}/path")`, so the base must be normalised once up front.

use url::Url;

use crate::error::SyncError;

/// Normalise a service base URL.
///
/// If the input doesn't include an `http://` or `https://` scheme, assumes
/// `https://`. Any trailing `/` is removed.
pub fn normalize_base_url(input: &str) -> Result<String, SyncError> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(SyncError::Validation("Base URL cannot be empty".to_string()));
  }

  let candidate = if has_http_scheme(trimmed) {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  };

  let url =
    Url::parse(&candidate).map_err(|e| SyncError::Validation(format!("Failed to parse URL '{input}': {e}")))?;
  if url.host_str().is_none() {
    return Err(SyncError::Validation(format!("URL '{input}' has no host")));
  }

  Ok(url.as_str().trim_end_matches('/').to_string())
}

fn has_http_scheme(input: &str) -> bool {
  let lowered = input.to_ascii_lowercase();
  lowered.starts_with("http://") || lowered.starts_with("https://")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_base_url_with_https() {
    let result = normalize_base_url("https://company.atlassian.net").unwrap();
    assert_eq!(result, "https://company.atlassian.net");
  }

  #[test]
  fn test_normalize_base_url_without_scheme() {
    let result = normalize_base_url("company.atlassian.net").unwrap();
    assert_eq!(result, "https://company.atlassian.net");
  }

  #[test]
  fn test_normalize_base_url_trailing_slash() {
    let result = normalize_base_url("https://company.atlassian.net/").unwrap();
    assert_eq!(result, "https://company.atlassian.net");

    let result = normalize_base_url("https://jira.example.com/jira/").unwrap();
    assert_eq!(result, "https://jira.example.com/jira");
  }

  #[test]
  fn test_normalize_base_url_with_http_and_port() {
    let result = normalize_base_url("http://127.0.0.1:8080").unwrap();
    assert_eq!(result, "http://127.0.0.1:8080");
  }

  #[test]
  fn test_normalize_base_url_host_and_port_without_scheme() {
    let result = normalize_base_url("localhost:8080").unwrap();
    assert_eq!(result, "https://localhost:8080");
  }

  #[test]
  fn test_normalize_base_url_uppercase_scheme() {
    let result = normalize_base_url("HTTPS://example.com").unwrap();
    assert_eq!(result, "https://example.com");
  }

  #[test]
  fn test_normalize_base_url_empty() {
    let result = normalize_base_url("   ");
    assert!(matches!(result, Err(SyncError::Validation(_))));
  }
}
