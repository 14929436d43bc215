//! # Ferry Entry Point
//!
//! Loads the run configuration from the environment, mirrors the GitHub issue
//! into Jira, and exits non-zero with the error chain on any failure.

use anyhow::{Context, Result};
use clap::Parser;
use ferry_cli::cli::Cli;
use ferry_cli::sync;
use ferry_core::Config;
use tokio::runtime::Runtime;
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
  let cmd = Cli::parse();

  // Set up tracing based on verbosity level
  let level = cmd.level();
  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  let config = Config::from_env()?;
  debug!("Loaded configuration: {:?}", config);

  let rt = Runtime::new().context("Failed to create async runtime")?;
  let outcome = rt.block_on(sync::run(&config))?;

  info!("{}", outcome);
  Ok(())
}
