//! # Command Line Interface
//!
//! Ferry takes its inputs from the environment, so the command line only
//! controls diagnostics.

use clap::{ArgAction, Parser};

/// Top-level CLI command for ferry
#[derive(Parser)]
#[command(name = "ferry")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Mirror a GitHub issue into Jira")]
#[command(
  long_about = "Ferry mirrors a single GitHub issue into Jira.\n\n\
        It reads the issue, its comments, and the people involved from GitHub, then\n\
        creates or updates the matching Jira issue, replays the comments, maps the\n\
        assignee, and moves the Jira workflow to follow the open/closed state.\n\n\
        Inputs are read from the environment, either bare or with the INPUT_ prefix:\n\
        GITHUB_TOKEN, GITHUB_REPOSITORY, GITHUB_ISSUE_NUMBER, GITHUB_API_URL (optional),\n\
        JIRA_URL, JIRA_USEREMAIL, JIRA_APITOKEN, JIRA_PROJECTKEY."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,
}

impl Cli {
  /// Tracing level selected by the `-v` count
  pub const fn level(&self) -> tracing::Level {
    match self.verbose {
      0 => tracing::Level::WARN,  // Default: warnings and errors
      1 => tracing::Level::INFO,  // -v: info, warnings, and errors
      2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
      _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_verbosity_levels() {
    let level = |args: &[&str]| Cli::try_parse_from(args).unwrap().level();

    assert_eq!(level(&["ferry"]), tracing::Level::WARN);
    assert_eq!(level(&["ferry", "-v"]), tracing::Level::INFO);
    assert_eq!(level(&["ferry", "-vv"]), tracing::Level::DEBUG);
    assert_eq!(level(&["ferry", "-vvvv"]), tracing::Level::TRACE);
  }
}
