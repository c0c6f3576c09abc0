use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pimbuild_core::{BuildError, parse_count};
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// pimbuild - native-build orchestrator for the PIM simulation toolchain
#[derive(Parser)]
#[command(name = "pimbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the runtime/SDK library for a tasklet count
  Sdk {
    /// Tasklets simulated per DPU
    #[arg(long = "num_tasklets", default_value_t = 1, value_parser = parse_count)]
    num_tasklets: u32,

    /// Source tree to configure (default: current directory)
    #[arg(long, default_value = ".")]
    source_dir: PathBuf,

    /// Build output tree (default: <source-dir>/build)
    #[arg(long)]
    build_dir: Option<PathBuf>,
  },

  /// Build benchmark executables for a DPU/tasklet topology
  Benchmark {
    /// DPUs the benchmark is compiled against
    #[arg(long = "num_dpus", default_value_t = 1, value_parser = parse_count)]
    num_dpus: u32,

    /// Tasklets simulated per DPU
    #[arg(long = "num_tasklets", default_value_t = 1, value_parser = parse_count)]
    num_tasklets: u32,

    /// Source tree to configure (default: current directory)
    #[arg(long, default_value = ".")]
    source_dir: PathBuf,

    /// Build output tree (default: <source-dir>/build)
    #[arg(long)]
    build_dir: Option<PathBuf>,
  },
}

fn main() {
  let cli = Cli::parse();

  // Initialize logging
  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt().with_env_filter(filter).without_time().init();

  let result = match cli.command {
    Commands::Sdk {
      num_tasklets,
      source_dir,
      build_dir,
    } => cmd::cmd_sdk(num_tasklets, &source_dir, build_dir),
    Commands::Benchmark {
      num_dpus,
      num_tasklets,
      source_dir,
      build_dir,
    } => cmd::cmd_benchmark(num_dpus, num_tasklets, &source_dir, build_dir),
  };

  if let Err(err) = result {
    output::print_error(&format!("{err:#}"));
    std::process::exit(exit_code(&err));
  }
}

/// A failing subprocess's own exit code propagates; everything else maps to 1.
fn exit_code(err: &anyhow::Error) -> i32 {
  err.downcast_ref::<BuildError>().map(BuildError::exit_code).unwrap_or(1)
}
