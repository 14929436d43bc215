//! Constants for the ferry-gh client

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!("ferry/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Page size used for list endpoints (the maximum GitHub allows)
pub const PER_PAGE: usize = 100;

/// Service name used in error messages
pub const SERVICE: &str = "GitHub";
