//! Topology parameter resolution.

use crate::Result;
use crate::error::BuildError;

/// Hardware topology a build is parameterized against.
///
/// Both counts are at least 1. Resolved once per invocation from CLI input or
/// defaults and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
  pub num_dpus: u32,
  pub num_tasklets: u32,
}

impl Topology {
  pub fn new(num_dpus: u32, num_tasklets: u32) -> Result<Self> {
    if num_dpus < 1 {
      return Err(BuildError::InvalidArgument(num_dpus.to_string()));
    }
    if num_tasklets < 1 {
      return Err(BuildError::InvalidArgument(num_tasklets.to_string()));
    }
    Ok(Self { num_dpus, num_tasklets })
  }
}

impl Default for Topology {
  /// One DPU, one tasklet.
  fn default() -> Self {
    Self { num_dpus: 1, num_tasklets: 1 }
  }
}

/// Parse a topology count from CLI input.
///
/// Non-numeric and non-positive values are rejected outright; nothing is
/// clamped. Usable directly as a clap value parser.
pub fn parse_count(value: &str) -> Result<u32> {
  match value.trim().parse::<i64>() {
    Ok(n) if n >= 1 && n <= i64::from(u32::MAX) => Ok(n as u32),
    _ => Err(BuildError::InvalidArgument(value.to_string())),
  }
}
