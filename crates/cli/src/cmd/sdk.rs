//! Implementation of the `pimbuild sdk` command.
//!
//! Entry point hard-bound to the SDK profile: the low-level runtime library
//! the simulator instruments. Only the tasklet count is part of this
//! command's surface; the DPU count plays no role in the runtime build.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use pimbuild_core::{BuildConfig, Profile, Toolchain, Topology};

use crate::output;

/// Execute the sdk command.
pub fn cmd_sdk(num_tasklets: u32, source_dir: &Path, build_dir: Option<PathBuf>) -> Result<()> {
  let topology = Topology::new(1, num_tasklets)?;
  let mut config = BuildConfig::new(Profile::Sdk, topology, source_dir);
  if let Some(dir) = build_dir {
    config = config.with_build_dir(dir);
  }
  let tools = Toolchain::from_env();

  output::print_info(&format!("building SDK runtime for {} tasklet(s)", topology.num_tasklets));

  let report = pimbuild_core::run(&config, &tools)?;

  info!(tree = %report.build_dir.display(), "sdk artifacts written");

  println!();
  output::print_success("SDK build complete");
  output::print_stat("Profile", "sdk");
  output::print_stat("Tasklets", &topology.num_tasklets.to_string());
  output::print_stat("Artifacts", &report.build_dir.display().to_string());
  output::print_stat("Elapsed", &output::format_duration(report.elapsed));

  Ok(())
}
