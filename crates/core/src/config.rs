//! Build invocation configuration.

use std::path::PathBuf;

use crate::profile::Profile;
use crate::topology::Topology;

/// Everything one orchestrator invocation needs, carried explicitly instead
/// of being derived from the invocation's own location.
#[derive(Debug, Clone)]
pub struct BuildConfig {
  pub profile: Profile,
  pub topology: Topology,
  pub source_dir: PathBuf,
  pub build_dir: PathBuf,
}

impl BuildConfig {
  /// Build output defaults to `build/` directly beneath the source tree.
  pub fn new(profile: Profile, topology: Topology, source_dir: impl Into<PathBuf>) -> Self {
    let source_dir = source_dir.into();
    let build_dir = source_dir.join("build");
    Self {
      profile,
      topology,
      source_dir,
      build_dir,
    }
  }

  pub fn with_build_dir(mut self, build_dir: impl Into<PathBuf>) -> Self {
    self.build_dir = build_dir.into();
    self
  }
}
