//! External tool discovery.
//!
//! The orchestrator shells out to two programs: cmake (build-rule generation)
//! and ninja (parallel build execution). Both resolve from environment
//! overrides first, then fall back to the bare program name on `PATH`. The
//! overrides double as the test seam: integration tests point them at fake
//! scripts.

use std::env;
use std::path::PathBuf;

pub const CMAKE_ENV: &str = "PIMBUILD_CMAKE";
pub const NINJA_ENV: &str = "PIMBUILD_NINJA";

/// Resolved paths (or bare names) of the external build tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
  pub cmake: PathBuf,
  pub ninja: PathBuf,
}

impl Toolchain {
  /// Resolve the toolchain from the process environment.
  pub fn from_env() -> Self {
    Self {
      cmake: resolve(CMAKE_ENV, "cmake"),
      ninja: resolve(NINJA_ENV, "ninja"),
    }
  }
}

impl Default for Toolchain {
  fn default() -> Self {
    Self::from_env()
  }
}

fn resolve(var: &str, fallback: &str) -> PathBuf {
  match env::var_os(var) {
    Some(value) if !value.is_empty() => PathBuf::from(value),
    _ => PathBuf::from(fallback),
  }
}
