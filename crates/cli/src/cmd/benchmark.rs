//! Implementation of the `pimbuild benchmark` command.
//!
//! Entry point hard-bound to the benchmark profile: user benchmark
//! executables compiled against the full DPU/tasklet topology.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use pimbuild_core::{BuildConfig, Profile, Toolchain, Topology};

use crate::output;

/// Execute the benchmark command.
pub fn cmd_benchmark(num_dpus: u32, num_tasklets: u32, source_dir: &Path, build_dir: Option<PathBuf>) -> Result<()> {
  let topology = Topology::new(num_dpus, num_tasklets)?;
  let mut config = BuildConfig::new(Profile::Benchmark, topology, source_dir);
  if let Some(dir) = build_dir {
    config = config.with_build_dir(dir);
  }
  let tools = Toolchain::from_env();

  output::print_info(&format!(
    "building benchmarks for {} DPU(s) x {} tasklet(s)",
    topology.num_dpus, topology.num_tasklets
  ));

  let report = pimbuild_core::run(&config, &tools)?;

  info!(tree = %report.build_dir.display(), "benchmark artifacts written");

  println!();
  output::print_success("Benchmark build complete");
  output::print_stat("Profile", "benchmark");
  output::print_stat("DPUs", &topology.num_dpus.to_string());
  output::print_stat("Tasklets", &topology.num_tasklets.to_string());
  output::print_stat("Artifacts", &report.build_dir.display().to_string());
  output::print_stat("Elapsed", &output::format_duration(report.elapsed));

  Ok(())
}
