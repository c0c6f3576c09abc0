//! Configure step: generate low-level build rules with cmake.
//!
//! One synchronous, deterministic attempt per invocation. The tool's output
//! streams through untouched; a non-zero exit aborts the pipeline before the
//! build step.

use std::ffi::OsString;
use std::process::Command;

use tracing::{debug, info};

use pimbuild_platform::Toolchain;

use crate::Result;
use crate::config::BuildConfig;
use crate::error::BuildError;

/// Build-rule generator requested from cmake.
const RULE_GENERATOR: &str = "Ninja";

/// Assemble the cmake argument list for one invocation.
///
/// Variable order: topology, compiler flags, build type, linker flags, then
/// tree paths and the generator. The DPU count is emitted only for profiles
/// that take one; the linker-flags variable only when the profile has linker
/// flags.
pub fn configure_args(config: &BuildConfig) -> Vec<OsString> {
  let flags = config.profile.flags();
  let mut args: Vec<OsString> = Vec::new();

  if config.profile.emits_dpu_count() {
    push_var(&mut args, format!("NR_DPUS={}", config.topology.num_dpus));
  }
  push_var(&mut args, format!("NR_TASKLETS={}", config.topology.num_tasklets));
  push_var(&mut args, format!("CMAKE_C_FLAGS={}", flags.compiler_flags_line()));
  push_var(&mut args, format!("CMAKE_CXX_FLAGS={}", flags.compiler_flags_line()));
  push_var(&mut args, format!("CMAKE_BUILD_TYPE={}", flags.build_type.as_str()));
  if !flags.linker_flags.is_empty() {
    push_var(&mut args, format!("CMAKE_EXE_LINKER_FLAGS={}", flags.linker_flags_line()));
  }

  args.push("-S".into());
  args.push(config.source_dir.clone().into_os_string());
  args.push("-B".into());
  args.push(config.build_dir.clone().into_os_string());
  args.push("-G".into());
  args.push(RULE_GENERATOR.into());

  args
}

fn push_var(args: &mut Vec<OsString>, var: String) {
  args.push("-D".into());
  args.push(var.into());
}

/// Run the configure tool synchronously against the (already reset) tree.
pub fn run_configure(config: &BuildConfig, tools: &Toolchain) -> Result<()> {
  let args = configure_args(config);
  info!(
    tool = %tools.cmake.display(),
    source = %config.source_dir.display(),
    "generating build rules"
  );
  debug!(args = ?args, "configure arguments");

  let status = Command::new(&tools.cmake).args(&args).status().map_err(|e| BuildError::ToolLaunch {
    tool: tools.cmake.display().to_string(),
    source: e,
  })?;

  if !status.success() {
    return Err(BuildError::ConfigureFailed { status });
  }

  Ok(())
}
