//! Environment variable management for testing
//!
//! Action inputs are read from the process environment, so tests that
//! exercise the real lookup must set variables and put them back afterwards.

use std::env;

/// RAII guard for a single environment variable.
///
/// The original value is captured on construction and restored (or the
/// variable removed again) when the guard is dropped.
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Capture the current value of `name`.
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// The variable this guard manages
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Set the variable for the lifetime of the guard
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the variable for the lifetime of the guard
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
