//! Constants for the ferry-jira client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("ferry/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Service name used in error messages
pub const SERVICE: &str = "Jira";

/// Page size requested from paged Jira endpoints
pub const PAGE_SIZE: usize = 100;
