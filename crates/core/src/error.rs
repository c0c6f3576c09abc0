//! Error types for pimbuild-core

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can abort a build invocation.
///
/// None of these are recovered locally: every variant terminates the pipeline
/// and surfaces to the caller as a non-zero process outcome.
#[derive(Debug, Error)]
pub enum BuildError {
  #[error("invalid topology value '{0}': expected a positive integer")]
  InvalidArgument(String),

  #[error("failed to reset build tree '{path}': {source}")]
  TreeReset {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("failed to launch {tool}: {source}")]
  ToolLaunch {
    tool: String,
    #[source]
    source: io::Error,
  },

  #[error("configure step failed ({status})")]
  ConfigureFailed { status: ExitStatus },

  #[error("build step failed ({status})")]
  BuildFailed { status: ExitStatus },

  #[error("lock error: {0}")]
  Lock(#[from] pimbuild_platform::LockError),
}

impl BuildError {
  /// Process exit code for this failure.
  ///
  /// A failing subprocess surfaces its own exit code; a signal-terminated
  /// child and every other failure map to 1.
  pub fn exit_code(&self) -> i32 {
    match self {
      BuildError::ConfigureFailed { status } | BuildError::BuildFailed { status } => status.code().unwrap_or(1),
      _ => 1,
    }
  }
}
