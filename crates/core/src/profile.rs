//! Artifact profiles and their fixed flag sets.
//!
//! Each orchestrator entry point is hard-bound to exactly one profile; the
//! flag set is derived purely from the profile and never from the topology.

/// The class of artifact an invocation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
  /// The low-level runtime/SDK library the simulator instruments.
  Sdk,
  /// User benchmark executables run on the simulated hardware.
  Benchmark,
}

/// Build type requested from the configuration tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
  Release,
  /// Opts out of the generator's default optimized/debug split entirely.
  None,
}

impl BuildType {
  pub fn as_str(&self) -> &'static str {
    match self {
      BuildType::Release => "Release",
      BuildType::None => "None",
    }
  }
}

/// Compiler/linker flags and build type for one artifact class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSet {
  pub compiler_flags: &'static [&'static str],
  pub linker_flags: &'static [&'static str],
  pub build_type: BuildType,
}

impl FlagSet {
  /// Compiler flags as the single space-joined value the build variable takes.
  pub fn compiler_flags_line(&self) -> String {
    self.compiler_flags.join(" ")
  }

  pub fn linker_flags_line(&self) -> String {
    self.linker_flags.join(" ")
  }
}

// SDK binaries are instrumentation targets for a simulator that re-derives
// timing from instructions; debug sections and unwind tables would bloat the
// binaries and desynchronize simulated execution.
const SDK_COMPILER_FLAGS: &[&str] = &[
  "-O0",
  "-g0",
  "-fno-asynchronous-unwind-tables",
  "-fno-unwind-tables",
  "-fno-dwarf2-cfi-asm",
];
const SDK_LINKER_FLAGS: &[&str] = &["-Wl,--strip-debug"];

// Benchmarks run optimized, but dead-code elimination and top-level statement
// reordering would strip or move the instrumentation points the simulator
// hooks; minimal line tables map simulated execution back to source.
const BENCHMARK_COMPILER_FLAGS: &[&str] = &["-O3", "-fno-tree-dce", "-fno-toplevel-reorder", "-g1"];

impl Profile {
  /// The fixed flag set for this profile.
  pub fn flags(&self) -> FlagSet {
    match self {
      Profile::Sdk => FlagSet {
        compiler_flags: SDK_COMPILER_FLAGS,
        linker_flags: SDK_LINKER_FLAGS,
        build_type: BuildType::None,
      },
      Profile::Benchmark => FlagSet {
        compiler_flags: BENCHMARK_COMPILER_FLAGS,
        linker_flags: &[],
        build_type: BuildType::Release,
      },
    }
  }

  /// Whether the DPU-count variable is part of this profile's configure
  /// surface. The SDK is per-DPU code and only sees the tasklet count.
  pub fn emits_dpu_count(&self) -> bool {
    matches!(self, Profile::Benchmark)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Profile::Sdk => "sdk",
      Profile::Benchmark => "benchmark",
    }
  }
}

impl std::fmt::Display for Profile {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
