//! pimbuild-core: build orchestration for the PIM simulation toolchain
//!
//! This crate turns a hardware topology (DPU count, tasklets per DPU) and an
//! artifact profile into a deterministic clean-rebuild invocation of the
//! external build tools: cmake generates the low-level build rules, ninja
//! executes them.

mod builder;
mod config;
mod configure;
mod error;
mod orchestrate;
mod profile;
mod topology;
mod tree;

pub use builder::run_build;
pub use config::BuildConfig;
pub use configure::{configure_args, run_configure};
pub use error::BuildError;
pub use orchestrate::{BuildReport, run};
pub use profile::{BuildType, FlagSet, Profile};
pub use topology::{Topology, parse_count};
pub use tree::reset_tree;

// Re-export from pimbuild-platform for convenience
pub use pimbuild_platform::Toolchain;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, BuildError>;
