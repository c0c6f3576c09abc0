//! Build step: execute the generated rules with ninja.
//!
//! The executor's own parallelism is opaque to the orchestrator; its exit
//! status is surfaced unchanged. There is no partial-artifact resume — the
//! tree was reset at the start of the invocation.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::info;

use pimbuild_platform::Toolchain;

use crate::Result;
use crate::error::BuildError;

pub(crate) fn build_args(build_dir: &Path) -> Vec<OsString> {
  vec!["-C".into(), build_dir.into()]
}

/// Run the build executor synchronously against the configured tree.
pub fn run_build(build_dir: &Path, tools: &Toolchain) -> Result<()> {
  info!(tool = %tools.ninja.display(), tree = %build_dir.display(), "building artifacts");

  let status = Command::new(&tools.ninja)
    .args(build_args(build_dir))
    .status()
    .map_err(|e| BuildError::ToolLaunch {
      tool: tools.ninja.display().to_string(),
      source: e,
    })?;

  if !status.success() {
    return Err(BuildError::BuildFailed { status });
  }

  Ok(())
}
