//! # Ferry CLI Library
//!
//! Command-line surface and sync pipeline for ferry, a CI action that mirrors
//! a GitHub issue into Jira.

pub mod cli;
pub mod sync;
