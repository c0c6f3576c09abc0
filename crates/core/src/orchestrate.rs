//! The orchestration pipeline.
//!
//! Stages run strictly in order, each a hard dependency of the next:
//! lock → tree reset → configure → build. Any stage failure terminates the
//! invocation; no stage is skipped, retried, or revisited.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::info;

use pimbuild_platform::{Toolchain, TreeLock};

use crate::Result;
use crate::builder::run_build;
use crate::config::BuildConfig;
use crate::configure::run_configure;
use crate::tree::reset_tree;

/// Summary of one successful invocation.
#[derive(Debug)]
pub struct BuildReport {
  pub build_dir: PathBuf,
  pub elapsed: Duration,
}

/// Run the full pipeline for one invocation.
///
/// The tree lock is held for the whole invocation; concurrent invocations
/// against the same build tree fail with a contention error instead of racing
/// the delete-then-recreate step.
pub fn run(config: &BuildConfig, tools: &Toolchain) -> Result<BuildReport> {
  let started = Instant::now();
  info!(
    profile = %config.profile,
    num_dpus = config.topology.num_dpus,
    num_tasklets = config.topology.num_tasklets,
    "starting build"
  );

  let _lock = TreeLock::acquire(&config.build_dir, &format!("pimbuild {}", config.profile))?;

  reset_tree(&config.build_dir)?;
  run_configure(config, tools)?;
  run_build(&config.build_dir, tools)?;

  info!(tree = %config.build_dir.display(), "build finished");

  Ok(BuildReport {
    build_dir: config.build_dir.clone(),
    elapsed: started.elapsed(),
  })
}
